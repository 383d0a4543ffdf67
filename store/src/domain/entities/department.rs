//! Department domain entity
//!
//! Departments carry overhead costs; their sales come from the products
//! filed under the same department name.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::Product;

/// Unique identifier for a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartmentId(pub i32);

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A store department
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub overhead_costs: Decimal,
}

/// Data needed to create a new department
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub overhead_costs: Decimal,
}

/// One row of the supervisor's sales report
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSales {
    pub department_id: DepartmentId,
    pub department_name: String,
    pub overhead_costs: Decimal,
    pub product_sales: Decimal,
    pub total_profit: Decimal,
}

/// Build the per-department sales report
///
/// Sales are summed over products whose `department_name` matches the
/// department. Departments without products report zero sales. Output keeps
/// the order of `departments`.
pub fn summarize_sales(departments: &[Department], products: &[Product]) -> Vec<DepartmentSales> {
    let mut sales: HashMap<&str, Decimal> = HashMap::new();
    for product in products {
        *sales.entry(product.department_name.as_str()).or_default() += product.product_sales;
    }

    departments
        .iter()
        .map(|department| {
            let product_sales = sales
                .get(department.name.as_str())
                .copied()
                .unwrap_or_default();
            DepartmentSales {
                department_id: department.id,
                department_name: department.name.clone(),
                overhead_costs: department.overhead_costs,
                product_sales,
                total_profit: product_sales - department.overhead_costs,
            }
        })
        .collect()
}
