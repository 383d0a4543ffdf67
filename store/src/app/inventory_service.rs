//! Inventory service
//!
//! Manager-side inventory operations: listings, restocking and new products.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::{AppError, DomainError};

/// Service for managing store inventory
pub struct InventoryService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
    low_stock_threshold: i32,
}

impl<PR> InventoryService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>, low_stock_threshold: i32) -> Self {
        Self {
            products,
            low_stock_threshold,
        }
    }

    /// All products with their stock
    pub async fn products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.list_all().await?)
    }

    /// Products running below the low stock threshold
    pub async fn low_inventory(&self) -> Result<Vec<Product>, AppError> {
        Ok(self
            .products
            .list_low_stock(self.low_stock_threshold)
            .await?)
    }

    /// Add units to a product's stock
    pub async fn restock(&self, id: &ProductId, units: i32) -> Result<(), AppError> {
        if units < 1 {
            return Err(
                DomainError::Validation("units must be greater than 0".to_string()).into(),
            );
        }

        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Product {}", id)))?;
        if product.stock_quantity.checked_add(units).is_none() {
            return Err(DomainError::Validation(format!(
                "product {} cannot hold {} more units",
                id, units
            ))
            .into());
        }

        self.products.add_stock(id, units).await?;
        tracing::info!(product_id = %id, units, "Inventory restocked");
        Ok(())
    }

    /// Add a new product to the store
    pub async fn add_product(&self, product: NewProduct) -> Result<Product, AppError> {
        if product.name.trim().is_empty() || product.department_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "product and department names are required".to_string(),
            )
            .into());
        }
        if product.unit_price <= Decimal::ZERO || product.stock_quantity < 1 {
            return Err(DomainError::Validation(
                "price and stock must be greater than 0".to_string(),
            )
            .into());
        }

        let created = self.products.create(&product).await?;
        tracing::info!(product_id = %created.id, name = %created.name, "Product added");
        Ok(created)
    }
}
