//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::entities::{Department, DepartmentId, Product, ProductId};

/// Create a test product with a price (e.g. "25.00") and stock level
pub fn test_product(id: i32, price: &str, stock: i32) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {}", id),
        department_name: "General".to_string(),
        unit_price: Decimal::from_str(price).expect("fixture price must parse"),
        stock_quantity: stock,
        product_sales: Decimal::ZERO,
    }
}

/// Create a test product filed under a department with accumulated sales
pub fn test_product_in(id: i32, department: &str, sales: i64) -> Product {
    Product {
        department_name: department.to_string(),
        product_sales: Decimal::from(sales),
        ..test_product(id, "10.00", 10)
    }
}

/// Create a test department
pub fn test_department(id: i32, name: &str, overhead: i64) -> Department {
    Department {
        id: DepartmentId(id),
        name: name.to_string(),
        overhead_costs: Decimal::from(overhead),
    }
}
