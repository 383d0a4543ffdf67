//! SQL adapter for ProductRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{CatalogItem, NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// SeaORM implementation of ProductRepository
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn list_catalog(&self) -> Result<Vec<CatalogItem>, DomainError> {
        let rows: Vec<(i32, String, Decimal)> = products::Entity::find()
            .select_only()
            .column(products::Column::ItemId)
            .column(products::Column::ProductName)
            .column(products::Column::Price)
            .order_by_asc(products::Column::ItemId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, unit_price)| CatalogItem {
                id: ProductId(id),
                name,
                unit_price,
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::ItemId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_low_stock(&self, threshold: i32) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .filter(products::Column::StockQuantity.lt(threshold))
            .order_by_asc(products::Column::ItemId)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn set_stock(&self, id: &ProductId, stock_quantity: i32) -> Result<(), DomainError> {
        products::ActiveModel {
            item_id: Set(id.0),
            stock_quantity: Set(stock_quantity),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Product {}", id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }

    async fn add_stock(&self, id: &ProductId, units: i32) -> Result<(), DomainError> {
        let result = products::Entity::update_many()
            .col_expr(
                products::Column::StockQuantity,
                Expr::col(products::Column::StockQuantity).add(units),
            )
            .filter(products::Column::ItemId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Product {}", id)));
        }

        Ok(())
    }

    async fn record_sale(&self, id: &ProductId, amount: Decimal) -> Result<(), DomainError> {
        let result = products::Entity::update_many()
            .col_expr(
                products::Column::ProductSales,
                Expr::col(products::Column::ProductSales).add(amount),
            )
            .filter(products::Column::ItemId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Product {}", id)));
        }

        Ok(())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let model = products::ActiveModel {
            product_name: Set(product.name.clone()),
            department_name: Set(product.department_name.clone()),
            price: Set(product.unit_price),
            stock_quantity: Set(product.stock_quantity),
            product_sales: Set(Decimal::ZERO),
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
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.item_id),
            name: model.product_name,
            department_name: model.department_name,
            unit_price: model.price,
            stock_quantity: model.stock_quantity,
            product_sales: model.product_sales,
        }
    }
}
