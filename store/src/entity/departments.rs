//! `departments` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub department_id: i32,
    #[sea_orm(unique)]
    pub department_name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub over_head_costs: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
