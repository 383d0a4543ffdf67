//! BAMazon manager portal
//!
//! Inventory listings, restocking and new products.

use anyhow::Result;
use bamazon_cli::{launch, Role};

#[tokio::main]
async fn main() -> Result<()> {
    launch(Role::Manager).await
}
