//! Product domain entity
//!
//! A row of the store's inventory.

use rust_decimal::Decimal;

/// Unique identifier for a product (the `item_id` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i32);

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product stocked by the store
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub department_name: String,
    pub unit_price: Decimal,
    pub stock_quantity: i32,
    /// Running revenue from fulfilled customer orders
    pub product_sales: Decimal,
}

impl Product {
    /// Check whether the product is below the given restock threshold
    pub fn is_low_stock(&self, threshold: i32) -> bool {
        self.stock_quantity < threshold
    }
}

/// What the customer sees of a product
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
}

impl From<&Product> for CatalogItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
        }
    }
}

/// Data needed to add a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub department_name: String,
    pub unit_price: Decimal,
    pub stock_quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_stock(stock: i32) -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            department_name: "Tools".to_string(),
            unit_price: Decimal::new(999, 2),
            stock_quantity: stock,
            product_sales: Decimal::ZERO,
        }
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(product_with_stock(4).is_low_stock(5));
        assert!(!product_with_stock(5).is_low_stock(5));
    }

    #[test]
    fn catalog_item_drops_stock() {
        let item = CatalogItem::from(&product_with_stock(3));
        assert_eq!(item.id, ProductId(1));
        assert_eq!(item.name, "Widget");
        assert_eq!(item.unit_price, Decimal::new(999, 2));
    }

    #[test]
    fn product_id_display() {
        assert_eq!(ProductId(7).to_string(), "7");
    }
}
