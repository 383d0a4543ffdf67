//! BAMazon customer storefront
//!
//! Lists the catalog and takes orders until the customer is done.

use anyhow::Result;
use bamazon_cli::{launch, Role};

#[tokio::main]
async fn main() -> Result<()> {
    launch(Role::Customer).await
}
