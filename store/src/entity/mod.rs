//! SeaORM entities
//!
//! Table mappings for the storefront schema. Domain code never sees these;
//! the SQL adapters convert them into domain entities.

pub mod departments;
pub mod products;
