use std::env;

/// Stock level below which a product is listed as low inventory
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Products with fewer units than this show up under "View Low Inventory"
    pub low_stock_threshold: i32,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS` and `DB_NAME`, defaulting to
    /// the local MySQL `bamazon` database.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            mysql_url(
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &env::var("DB_PORT").unwrap_or_else(|_| "3306".to_string()),
                &env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
                &env::var("DB_PASS").unwrap_or_default(),
                &env::var("DB_NAME").unwrap_or_else(|_| "bamazon".to_string()),
            )
        });

        Self {
            database_url,
            low_stock_threshold: env::var("LOW_STOCK_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
        }
    }
}

fn mysql_url(host: &str, port: &str, user: &str, password: &str, database: &str) -> String {
    if password.is_empty() {
        format!("mysql://{}@{}:{}/{}", user, host, port, database)
    } else {
        format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, database)
    }
}
