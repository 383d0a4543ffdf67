//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQL via SeaORM).

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    CatalogItem, Department, NewDepartment, NewProduct, Product, ProductId,
};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List id, name and price of every product, ordered by id
    async fn list_catalog(&self) -> Result<Vec<CatalogItem>, DomainError>;

    /// List every product with stock and sales, ordered by id
    async fn list_all(&self) -> Result<Vec<Product>, DomainError>;

    /// List products with fewer than `threshold` units in stock
    async fn list_low_stock(&self, threshold: i32) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Overwrite the stock quantity of a product
    ///
    /// Blind write: whatever was stored is replaced. Fails with
    /// `DomainError::NotFound` when no row matches.
    async fn set_stock(&self, id: &ProductId, stock_quantity: i32) -> Result<(), DomainError>;

    /// Add units to the stored stock quantity (`stock_quantity + units`)
    async fn add_stock(&self, id: &ProductId, units: i32) -> Result<(), DomainError>;

    /// Add an order's cost to the product's running sales total
    async fn record_sale(&self, id: &ProductId, amount: Decimal) -> Result<(), DomainError>;

    /// Create a new product
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;
}

/// Repository for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// List every department, ordered by id
    async fn list_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Find a department by its name
    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError>;

    /// Create a new department
    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError>;
}
