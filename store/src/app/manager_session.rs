//! Manager session
//!
//! Menu loop over the manager portal actions. Unknown ids and rejected
//! inputs are reported and the menu is shown again; storage failures end the
//! session.

use std::sync::Arc;

use crate::app::inventory_service::InventoryService;
use crate::app::menu::ManagerAction;
use crate::app::prompt::Prompter;
use crate::app::session::{finish, report_recoverable};
use crate::domain::entities::NewProduct;
use crate::domain::ports::{Console, ProductRepository, StoreConnection};
use crate::error::AppError;
use crate::render::render_inventory;

const MENU_TITLE: &str =
    "BAMazon Management Portal\n\nPlease choose an action from the list below.";

/// The manager's inventory session
pub struct ManagerSession<PR, C, SC>
where
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    inventory: InventoryService<PR>,
    prompt: Prompter<C>,
    connection: Arc<SC>,
}

impl<PR, C, SC> ManagerSession<PR, C, SC>
where
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    pub fn new(
        products: Arc<PR>,
        console: Arc<C>,
        connection: Arc<SC>,
        low_stock_threshold: i32,
    ) -> Self {
        Self {
            inventory: InventoryService::new(products, low_stock_threshold),
            prompt: Prompter::new(console),
            connection,
        }
    }

    /// Run until the operator exits, then release the connection
    pub async fn run(self) -> Result<(), AppError> {
        tracing::info!("Manager session started");
        let outcome = self.serve().await;
        finish("manager", outcome, self.connection.as_ref(), &self.prompt).await
    }

    async fn serve(&self) -> Result<(), AppError> {
        loop {
            let action: ManagerAction = self.prompt.choose(MENU_TITLE).await?;
            tracing::debug!(%action, "Manager action");

            let result = match action {
                ManagerAction::ViewProducts => self.show_products().await,
                ManagerAction::ViewLowInventory => self.show_low_inventory().await,
                ManagerAction::AddToInventory => self.add_to_inventory().await,
                ManagerAction::AddNewProduct => self.add_new_product().await,
                ManagerAction::Exit => return Ok(()),
            };

            if let Err(e) = result {
                report_recoverable(&self.prompt, e).await?;
            }
        }
    }

    async fn show_products(&self) -> Result<(), AppError> {
        let products = self.inventory.products().await?;
        self.prompt.say(&render_inventory(&products)).await?;
        Ok(())
    }

    async fn show_low_inventory(&self) -> Result<(), AppError> {
        let products = self.inventory.low_inventory().await?;
        self.prompt.say(&render_inventory(&products)).await?;
        Ok(())
    }

    async fn add_to_inventory(&self) -> Result<(), AppError> {
        let products = self.inventory.products().await?;
        self.prompt.say(&render_inventory(&products)).await?;

        let Some(max_id) = products.iter().map(|p| p.id.0).max() else {
            return Ok(());
        };

        let id = self
            .prompt
            .product_id(
                "\nEnter the ID of the product you would like to add more of.",
                max_id,
            )
            .await?;
        let units = self
            .prompt
            .quantity("How many units would you like to add to the inventory?")
            .await?;

        self.inventory.restock(&id, units).await?;
        self.prompt
            .say(&format!("\n{} units added to inventory.", units))
            .await?;
        Ok(())
    }

    async fn add_new_product(&self) -> Result<(), AppError> {
        let name = self
            .prompt
            .text("\nPlease enter the name of the new product.")
            .await?;
        let department_name = self
            .prompt
            .text("Enter the department this product belongs in.")
            .await?;
        let unit_price = self.prompt.price("Enter the price for this product.").await?;
        let stock_quantity = self
            .prompt
            .quantity("Enter the stock quantity for this product.")
            .await?;

        let product = self
            .inventory
            .add_product(NewProduct {
                name,
                department_name,
                unit_price,
                stock_quantity,
            })
            .await?;
        self.prompt
            .say(&format!("\nYou have added {} to the store!", product.name))
            .await?;
        Ok(())
    }
}
