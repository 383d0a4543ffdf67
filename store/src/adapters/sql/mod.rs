//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code serves
//! MySQL and PostgreSQL; the driver is picked from the connection URL.

pub mod connection;
pub mod department_repo;
pub mod product_repo;


pub use connection::SqlConnection;
pub use department_repo::SqlDepartmentRepository;
pub use product_repo::SqlProductRepository;
