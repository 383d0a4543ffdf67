//! Console rendering
//!
//! Plain-text views of products, orders and reports for the operator console.

pub mod renderer;

pub use renderer::{
    render_catalog, render_department_sales, render_inventory, render_menu, render_order_outcome,
};
