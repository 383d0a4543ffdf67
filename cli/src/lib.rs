//! BAMazon launcher
//!
//! Shared startup for the role binaries: logging, configuration, the single
//! database connection and the role's session.

use std::sync::Arc;

use anyhow::{Context, Result};
use bamazon_store::adapters::{
    SqlConnection, SqlDepartmentRepository, SqlProductRepository, StdioConsole,
};
use bamazon_store::app::{CustomerSession, ManagerSession, SupervisorSession};
use bamazon_store::Config;
use sea_orm::Database;
use tracing_subscriber::EnvFilter;

/// Which storefront tool is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Manager,
    Supervisor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Manager => write!(f, "manager"),
            Role::Supervisor => write!(f, "supervisor"),
        }
    }
}

/// Initialize logging to stderr (stdout is the operator console)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run one role's session against the configured database
///
/// The connection is opened once here and handed to the session, which
/// releases it when it ends.
pub async fn launch(role: Role) -> Result<()> {
    init_tracing();

    let config = Config::from_env();
    tracing::info!(%role, "Starting BAMazon");

    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let connection = Arc::new(SqlConnection::new(db.clone()));
    let console = Arc::new(StdioConsole::new());
    let products = Arc::new(SqlProductRepository::new(db.clone()));

    match role {
        Role::Customer => {
            CustomerSession::new(products, console, connection)
                .run()
                .await
        }
        Role::Manager => {
            ManagerSession::new(products, console, connection, config.low_stock_threshold)
                .run()
                .await
        }
        Role::Supervisor => {
            let departments = Arc::new(SqlDepartmentRepository::new(db));
            SupervisorSession::new(departments, products, console, connection)
                .run()
                .await
        }
    }
    .with_context(|| format!("{} session failed", role))
}
