//! BAMazon supervisor portal

use anyhow::Result;
use bamazon_cli::{launch, Role};

#[tokio::main]
async fn main() -> Result<()> {
    launch(Role::Supervisor).await
}
