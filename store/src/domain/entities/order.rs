//! Order request and outcome
//!
//! Both live for a single customer cycle and are never persisted.

use rust_decimal::Decimal;

use super::{Product, ProductId};

/// A customer's request to buy `quantity` units of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest {
    pub product_id: ProductId,
    pub quantity: i32,
}

impl OrderRequest {
    pub fn new(product_id: ProductId, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Decision for an order request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Accepted {
        total_cost: Decimal,
        remaining_stock: i32,
    },
    Declined,
}

impl OrderOutcome {
    /// Decide an order against the product's current stock
    ///
    /// Ties accept: ordering exactly the stock on hand leaves zero units.
    pub fn decide(product: &Product, quantity: i32) -> Self {
        if product.stock_quantity >= quantity {
            OrderOutcome::Accepted {
                total_cost: product.unit_price * Decimal::from(quantity),
                remaining_stock: product.stock_quantity - quantity,
            }
        } else {
            OrderOutcome::Declined
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderOutcome::Accepted { .. })
    }

    pub fn total_cost(&self) -> Option<Decimal> {
        match self {
            OrderOutcome::Accepted { total_cost, .. } => Some(*total_cost),
            OrderOutcome::Declined => None,
        }
    }

    pub fn remaining_stock(&self) -> Option<i32> {
        match self {
            OrderOutcome::Accepted {
                remaining_stock, ..
            } => Some(*remaining_stock),
            OrderOutcome::Declined => None,
        }
    }
}
