//! Customer session
//!
//! The order loop:
//!
//! ```text
//! ShowCatalog -> CollectOrder -> Evaluate -> Fulfill | Decline -> AskContinue
//!                     ^                                                |
//!                     +------------------ yes -------------------------+
//!                                                                 no -> Terminate
//! ```
//!
//! The catalog is shown once at the start and is not refreshed between
//! orders. A product id with no row (deleted after the catalog was read) is
//! reported and the order is asked for again.

use std::sync::Arc;

use crate::app::order_service::OrderService;
use crate::app::prompt::Prompter;
use crate::app::session::finish;
use crate::domain::entities::{OrderOutcome, OrderRequest};
use crate::domain::ports::{Console, ProductRepository, StoreConnection};
use crate::error::{AppError, DomainError};
use crate::render::{render_catalog, render_order_outcome};

/// Session loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ShowCatalog,
    CollectOrder,
    Evaluate(OrderRequest),
    Fulfill {
        request: OrderRequest,
        outcome: OrderOutcome,
    },
    Decline,
    AskContinue,
    Terminate,
}

/// The customer's storefront session
pub struct CustomerSession<PR, C, SC>
where
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    orders: OrderService<PR>,
    prompt: Prompter<C>,
    connection: Arc<SC>,
}

impl<PR, C, SC> CustomerSession<PR, C, SC>
where
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    pub fn new(products: Arc<PR>, console: Arc<C>, connection: Arc<SC>) -> Self {
        Self {
            orders: OrderService::new(products),
            prompt: Prompter::new(console),
            connection,
        }
    }

    /// Run until the operator stops ordering, then release the connection
    pub async fn run(self) -> Result<(), AppError> {
        tracing::info!("Customer session started");
        let outcome = self.serve().await;
        finish("customer", outcome, self.connection.as_ref(), &self.prompt).await
    }

    async fn serve(&self) -> Result<(), AppError> {
        let mut max_id = 0;
        let mut state = State::ShowCatalog;

        loop {
            state = match state {
                State::ShowCatalog => {
                    let catalog = self.orders.catalog().await?;
                    self.prompt.say(&render_catalog(&catalog)).await?;
                    match catalog.iter().map(|item| item.id.0).max() {
                        Some(id) => {
                            max_id = id;
                            State::CollectOrder
                        }
                        None => State::Terminate,
                    }
                }

                State::CollectOrder => {
                    let product_id = self
                        .prompt
                        .product_id(
                            "\nPlease enter the ID of the product you wish to buy.",
                            max_id,
                        )
                        .await?;
                    let quantity = self
                        .prompt
                        .quantity("How many would you like to buy?")
                        .await?;
                    State::Evaluate(OrderRequest::new(product_id, quantity))
                }

                State::Evaluate(request) => match self.orders.evaluate(&request).await {
                    Ok(outcome @ OrderOutcome::Accepted { .. }) => {
                        State::Fulfill { request, outcome }
                    }
                    Ok(OrderOutcome::Declined) => State::Decline,
                    Err(AppError::Domain(DomainError::NotFound(_))) => {
                        tracing::warn!(
                            product_id = %request.product_id,
                            "Ordered product not found"
                        );
                        self.prompt
                            .say(&format!(
                                "\nNo product found with ID {}.",
                                request.product_id
                            ))
                            .await?;
                        State::CollectOrder
                    }
                    Err(e) => return Err(e),
                },

                State::Fulfill { request, outcome } => {
                    self.orders.fulfill(&request, &outcome).await?;
                    self.prompt.say(&render_order_outcome(&outcome)).await?;
                    State::AskContinue
                }

                State::Decline => {
                    self.prompt
                        .say(&render_order_outcome(&OrderOutcome::Declined))
                        .await?;
                    State::AskContinue
                }

                State::AskContinue => {
                    if self
                        .prompt
                        .confirm("Would you like to place another order?")
                        .await?
                    {
                        State::CollectOrder
                    } else {
                        State::Terminate
                    }
                }

                State::Terminate => return Ok(()),
            };
        }
    }
}
