//! Department service
//!
//! Supervisor-side operations: the sales-by-department report and creating
//! departments.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{summarize_sales, Department, DepartmentSales, NewDepartment};
use crate::domain::ports::{DepartmentRepository, ProductRepository};
use crate::error::{AppError, DomainError};

/// Service for department reporting and management
pub struct DepartmentService<DR, PR>
where
    DR: DepartmentRepository,
    PR: ProductRepository,
{
    departments: Arc<DR>,
    products: Arc<PR>,
}

impl<DR, PR> DepartmentService<DR, PR>
where
    DR: DepartmentRepository,
    PR: ProductRepository,
{
    pub fn new(departments: Arc<DR>, products: Arc<PR>) -> Self {
        Self {
            departments,
            products,
        }
    }

    /// Product sales, overhead and profit per department
    pub async fn sales_report(&self) -> Result<Vec<DepartmentSales>, AppError> {
        let departments = self.departments.list_all().await?;
        let products = self.products.list_all().await?;

        Ok(summarize_sales(&departments, &products))
    }

    /// Create a department; names must be unique
    pub async fn create_department(
        &self,
        name: &str,
        overhead_costs: Decimal,
    ) -> Result<Department, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("department name is required".to_string()).into());
        }
        if overhead_costs.is_sign_negative() {
            return Err(
                DomainError::Validation("overhead costs cannot be negative".to_string()).into(),
            );
        }

        if self.departments.find_by_name(name).await?.is_some() {
            return Err(DomainError::AlreadyExists(format!("Department '{}'", name)).into());
        }

        let department = self
            .departments
            .create(&NewDepartment {
                name: name.to_string(),
                overhead_costs,
            })
            .await?;
        tracing::info!(department_id = %department.id, name = %department.name, "Department created");

        Ok(department)
    }
}
