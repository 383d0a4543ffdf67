//! Supervisor session
//!
//! Menu loop over the supervisor portal actions.

use std::sync::Arc;

use crate::app::department_service::DepartmentService;
use crate::app::menu::SupervisorAction;
use crate::app::prompt::Prompter;
use crate::app::session::{finish, report_recoverable};
use crate::domain::ports::{Console, DepartmentRepository, ProductRepository, StoreConnection};
use crate::error::AppError;
use crate::render::render_department_sales;

const MENU_TITLE: &str =
    "BAMazon Supervisor Portal\n\nPlease choose an action from the list below.";

/// The supervisor's reporting session
pub struct SupervisorSession<DR, PR, C, SC>
where
    DR: DepartmentRepository,
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    departments: DepartmentService<DR, PR>,
    prompt: Prompter<C>,
    connection: Arc<SC>,
}

impl<DR, PR, C, SC> SupervisorSession<DR, PR, C, SC>
where
    DR: DepartmentRepository,
    PR: ProductRepository,
    C: Console,
    SC: StoreConnection,
{
    pub fn new(
        departments: Arc<DR>,
        products: Arc<PR>,
        console: Arc<C>,
        connection: Arc<SC>,
    ) -> Self {
        Self {
            departments: DepartmentService::new(departments, products),
            prompt: Prompter::new(console),
            connection,
        }
    }

    /// Run until the operator exits, then release the connection
    pub async fn run(self) -> Result<(), AppError> {
        tracing::info!("Supervisor session started");
        let outcome = self.serve().await;
        finish("supervisor", outcome, self.connection.as_ref(), &self.prompt).await
    }

    async fn serve(&self) -> Result<(), AppError> {
        loop {
            let action: SupervisorAction = self.prompt.choose(MENU_TITLE).await?;
            tracing::debug!(%action, "Supervisor action");

            let result = match action {
                SupervisorAction::ViewDepartmentSales => self.show_department_sales().await,
                SupervisorAction::CreateDepartment => self.create_department().await,
                SupervisorAction::Exit => return Ok(()),
            };

            if let Err(e) = result {
                report_recoverable(&self.prompt, e).await?;
            }
        }
    }

    async fn show_department_sales(&self) -> Result<(), AppError> {
        let report = self.departments.sales_report().await?;
        self.prompt.say(&render_department_sales(&report)).await?;
        Ok(())
    }

    async fn create_department(&self) -> Result<(), AppError> {
        let name = self
            .prompt
            .text("\nPlease enter the name of the new department.")
            .await?;
        let overhead_costs = self
            .prompt
            .amount("Enter the overhead costs for this department.")
            .await?;

        let department = self
            .departments
            .create_department(&name, overhead_costs)
            .await?;
        self.prompt
            .say(&format!(
                "\nDepartment {} created with ID {}.",
                department.name, department.id
            ))
            .await?;
        Ok(())
    }
}
