//! Order service
//!
//! The customer's order flow against storage:
//! - Catalog listing
//! - Order evaluation (stock check, cost)
//! - Inventory mutation and sales booking for accepted orders

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{CatalogItem, OrderOutcome, OrderRequest, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::{AppError, DomainError};

/// Service for evaluating and fulfilling customer orders
pub struct OrderService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
}

impl<PR> OrderService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// List the products a customer can order
    pub async fn catalog(&self) -> Result<Vec<CatalogItem>, AppError> {
        Ok(self.products.list_catalog().await?)
    }

    /// Decide whether an order can be filled from current stock
    ///
    /// Reads only. A product id with no row is `DomainError::NotFound`.
    pub async fn evaluate(&self, request: &OrderRequest) -> Result<OrderOutcome, AppError> {
        let product = self
            .products
            .find_by_id(&request.product_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Product {}", request.product_id)))?;

        let outcome = OrderOutcome::decide(&product, request.quantity);
        tracing::debug!(
            product_id = %request.product_id,
            quantity = request.quantity,
            stock = product.stock_quantity,
            accepted = outcome.is_accepted(),
            "Evaluated order"
        );

        Ok(outcome)
    }

    /// Write the post-order stock level for a product
    ///
    /// Blind overwrite of whatever is stored; with one operator per process
    /// nothing can change the row between `evaluate` and this write.
    pub async fn apply(
        &self,
        product_id: &ProductId,
        remaining_stock: i32,
    ) -> Result<(), AppError> {
        self.products.set_stock(product_id, remaining_stock).await?;
        tracing::info!(product_id = %product_id, remaining_stock, "Stock updated");
        Ok(())
    }

    /// Add a fulfilled order's cost to the product's sales total
    pub async fn record_sale(
        &self,
        product_id: &ProductId,
        total_cost: Decimal,
    ) -> Result<(), AppError> {
        self.products.record_sale(product_id, total_cost).await?;
        Ok(())
    }

    /// Carry out an accepted order: write the stock left, then book the sale
    ///
    /// A declined outcome writes nothing.
    pub async fn fulfill(
        &self,
        request: &OrderRequest,
        outcome: &OrderOutcome,
    ) -> Result<(), AppError> {
        let (Some(remaining_stock), Some(total_cost)) =
            (outcome.remaining_stock(), outcome.total_cost())
        else {
            return Ok(());
        };

        self.apply(&request.product_id, remaining_stock).await?;
        self.record_sale(&request.product_id, total_cost).await
    }
}
