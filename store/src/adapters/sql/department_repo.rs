//! SQL adapter for DepartmentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{Department, DepartmentId, NewDepartment};
use crate::domain::ports::DepartmentRepository;
use crate::entity::departments;
use crate::error::DomainError;

/// SeaORM implementation of DepartmentRepository
pub struct SqlDepartmentRepository {
    db: DatabaseConnection,
}

impl SqlDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SqlDepartmentRepository {
    async fn list_all(&self) -> Result<Vec<Department>, DomainError> {
        let results = departments::Entity::find()
            .order_by_asc(departments::Column::DepartmentId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError> {
        let result = departments::Entity::find()
            .filter(departments::Column::DepartmentName.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let model = departments::ActiveModel {
            department_name: Set(department.name.clone()),
            over_head_costs: Set(department.overhead_costs),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Department {
            id: DepartmentId(model.department_id),
            name: model.department_name,
            overhead_costs: model.over_head_costs,
        }
    }
}
