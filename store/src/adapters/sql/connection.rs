//! SeaORM adapter for StoreConnection

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::domain::ports::StoreConnection;
use crate::error::DomainError;

/// Owns the session's database connection until it is released
pub struct SqlConnection {
    db: Mutex<Option<DatabaseConnection>>,
}

impl SqlConnection {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Mutex::new(Some(db)),
        }
    }
}

#[async_trait]
impl StoreConnection for SqlConnection {
    async fn release(&self) -> Result<(), DomainError> {
        // Repositories hold clones of the same pool; closing it here closes theirs too.
        let Some(db) = self.db.lock().await.take() else {
            return Ok(());
        };

        db.close()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!("Database connection released");
        Ok(())
    }
}
