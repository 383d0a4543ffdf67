//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod connection;
pub mod console;
pub mod repositories;

pub use connection::StoreConnection;
pub use console::Console;
pub use repositories::{DepartmentRepository, ProductRepository};
