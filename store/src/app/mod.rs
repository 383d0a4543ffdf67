//! Application layer
//!
//! Contains use cases and session orchestration.
//! Services coordinate between domain entities and ports; sessions drive the
//! services from operator input, one role each.

pub mod customer_session;
pub mod department_service;
pub mod inventory_service;
pub mod manager_session;
pub mod menu;
pub mod order_service;
pub mod prompt;
pub mod session;
pub mod supervisor_session;

pub use customer_session::CustomerSession;
pub use department_service::DepartmentService;
pub use inventory_service::InventoryService;
pub use manager_session::ManagerSession;
pub use menu::{ManagerAction, MenuAction, SupervisorAction};
pub use order_service::OrderService;
pub use prompt::Prompter;
pub use supervisor_session::SupervisorSession;
