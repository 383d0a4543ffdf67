//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod sql;
pub mod terminal;

pub use sql::{SqlConnection, SqlDepartmentRepository, SqlProductRepository};
pub use terminal::StdioConsole;
