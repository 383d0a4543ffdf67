//! Menu actions for the manager and supervisor consoles
//!
//! Each menu is a closed set of actions dispatched with a `match`.

use std::fmt::Display;
use std::str::FromStr;

/// A closed set of menu actions
pub trait MenuAction: Copy + Display + FromStr + 'static {
    /// All actions, in menu order
    const ALL: &'static [Self];

    /// The text shown in the menu
    fn label(&self) -> &'static str;
}

/// Actions available in the manager portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerAction {
    ViewProducts,
    ViewLowInventory,
    AddToInventory,
    AddNewProduct,
    Exit,
}

impl MenuAction for ManagerAction {
    const ALL: &'static [Self] = &[
        ManagerAction::ViewProducts,
        ManagerAction::ViewLowInventory,
        ManagerAction::AddToInventory,
        ManagerAction::AddNewProduct,
        ManagerAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            ManagerAction::ViewProducts => "View Products for Sale",
            ManagerAction::ViewLowInventory => "View Low Inventory",
            ManagerAction::AddToInventory => "Add to Inventory",
            ManagerAction::AddNewProduct => "Add New Product",
            ManagerAction::Exit => "Exit App",
        }
    }
}

impl std::fmt::Display for ManagerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ManagerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "view" | "products" | "list" => Ok(ManagerAction::ViewProducts),
            "low" | "low-inventory" | "low_inventory" => Ok(ManagerAction::ViewLowInventory),
            "restock" | "add-inventory" | "add_inventory" => Ok(ManagerAction::AddToInventory),
            "new" | "add-product" | "add_product" => Ok(ManagerAction::AddNewProduct),
            "exit" | "quit" | "q" => Ok(ManagerAction::Exit),
            _ => Err(format!("Unknown manager action: {}", s)),
        }
    }
}

/// Actions available in the supervisor portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorAction {
    ViewDepartmentSales,
    CreateDepartment,
    Exit,
}

impl MenuAction for SupervisorAction {
    const ALL: &'static [Self] = &[
        SupervisorAction::ViewDepartmentSales,
        SupervisorAction::CreateDepartment,
        SupervisorAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            SupervisorAction::ViewDepartmentSales => "View Product Sales by Department",
            SupervisorAction::CreateDepartment => "Create New Department",
            SupervisorAction::Exit => "Exit App",
        }
    }
}

impl std::fmt::Display for SupervisorAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SupervisorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sales" | "report" | "view" => Ok(SupervisorAction::ViewDepartmentSales),
            "new" | "create" | "department" => Ok(SupervisorAction::CreateDepartment),
            "exit" | "quit" | "q" => Ok(SupervisorAction::Exit),
            _ => Err(format!("Unknown supervisor action: {}", s)),
        }
    }
}
