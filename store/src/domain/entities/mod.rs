//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod department;
pub mod order;
pub mod product;

pub use department::{summarize_sales, Department, DepartmentId, DepartmentSales, NewDepartment};
pub use order::{OrderOutcome, OrderRequest};
pub use product::{CatalogItem, NewProduct, Product, ProductId};
