//! In-memory stand-ins for the storefront ports
//!
//! Product and department tables kept in maps, a console that replays a
//! scripted operator, and a connection handle that counts releases. The
//! product repository can be told to fail or to lose rows between listing and
//! lookup, and it counts lookups and stock writes for assertions.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use crate::domain::entities::{
    CatalogItem, Department, DepartmentId, NewDepartment, NewProduct, Product, ProductId,
};
use crate::domain::ports::{Console, DepartmentRepository, ProductRepository, StoreConnection};
use crate::error::{ConsoleError, DomainError};

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<ProductId, Product>>,
    /// Ids still listed in the catalog but gone when looked up
    vanished: RwLock<HashSet<ProductId>>,
    fail_reads: bool,
    fail_writes: bool,
    lookups: AtomicUsize,
    stock_writes: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    /// Make single-row lookups and writes miss this id
    pub fn without_lookup(self, id: ProductId) -> Self {
        self.vanished.write().unwrap().insert(id);
        self
    }

    /// Fail every read and write with a database error
    pub fn failing(mut self) -> Self {
        self.fail_reads = true;
        self.fail_writes = true;
        self
    }

    /// Fail writes only
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn stock_of(&self, id: ProductId) -> Option<i32> {
        self.products.read().unwrap().get(&id).map(|p| p.stock_quantity)
    }

    pub fn sales_of(&self, id: ProductId) -> Option<Decimal> {
        self.products.read().unwrap().get(&id).map(|p| p.product_sales)
    }

    pub fn price_of(&self, id: ProductId) -> Option<Decimal> {
        self.products.read().unwrap().get(&id).map(|p| p.unit_price)
    }

    /// Number of single-row lookups performed
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Number of stock writes (overwrites and restocks) performed
    pub fn stock_writes(&self) -> usize {
        self.stock_writes.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::Database("mock read failure".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Database("mock write failure".to_string()));
        }
        Ok(())
    }

    /// Apply `change` to a stored product, honoring vanished ids
    fn modify(&self, id: &ProductId, change: impl FnOnce(&mut Product)) -> Result<(), DomainError> {
        if self.vanished.read().unwrap().contains(id) {
            return Err(DomainError::NotFound(format!("Product {}", id)));
        }
        let mut products = self.products.write().unwrap();
        let product = products
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Product {}", id)))?;
        change(product);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_catalog(&self) -> Result<Vec<CatalogItem>, DomainError> {
        self.check_read()?;
        let products = self.products.read().unwrap();
        Ok(products.values().map(CatalogItem::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        self.check_read()?;
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn list_low_stock(&self, threshold: i32) -> Result<Vec<Product>, DomainError> {
        self.check_read()?;
        let products = self.products.read().unwrap();
        Ok(products
            .values()
            .filter(|p| p.is_low_stock(threshold))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        if self.vanished.read().unwrap().contains(id) {
            return Ok(None);
        }
        let products = self.products.read().unwrap();
        Ok(products.get(id).cloned())
    }

    async fn set_stock(&self, id: &ProductId, stock_quantity: i32) -> Result<(), DomainError> {
        self.check_write()?;
        self.modify(id, |p| p.stock_quantity = stock_quantity)?;
        self.stock_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn add_stock(&self, id: &ProductId, units: i32) -> Result<(), DomainError> {
        self.check_write()?;
        self.modify(id, |p| p.stock_quantity += units)?;
        self.stock_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn record_sale(&self, id: &ProductId, amount: Decimal) -> Result<(), DomainError> {
        self.check_write()?;
        self.modify(id, |p| p.product_sales += amount)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        self.check_write()?;
        let mut products = self.products.write().unwrap();
        let next_id = products.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        let created = Product {
            id: ProductId(next_id),
            name: product.name.clone(),
            department_name: product.department_name.clone(),
            unit_price: product.unit_price,
            stock_quantity: product.stock_quantity,
            product_sales: Decimal::ZERO,
        };
        products.insert(created.id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Department Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    departments: RwLock<Vec<Department>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a department for testing
    pub fn with_department(self, department: Department) -> Self {
        self.departments.write().unwrap().push(department);
        self
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn list_all(&self) -> Result<Vec<Department>, DomainError> {
        let mut departments = self.departments.read().unwrap().clone();
        departments.sort_by_key(|d| d.id.0);
        Ok(departments)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DomainError> {
        let departments = self.departments.read().unwrap();
        Ok(departments.iter().find(|d| d.name == name).cloned())
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let mut departments = self.departments.write().unwrap();
        let next_id = departments.iter().map(|d| d.id.0).max().unwrap_or(0) + 1;
        let created = Department {
            id: DepartmentId(next_id),
            name: department.name.clone(),
            overhead_costs: department.overhead_costs,
        };
        departments.push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// Scripted Console
// ============================================================================

/// Console that answers prompts from a fixed script and records output
///
/// Once the script runs out, reads fail with `ConsoleError::Closed`.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    output: Mutex<String>,
    questions: AtomicUsize,
}

impl ScriptedConsole {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(script.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Everything written to the console so far
    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }

    /// Number of prompts shown, including ones that hit the end of the script
    pub fn questions_asked(&self) -> usize {
        self.questions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&self, _prompt: &str) -> Result<String, ConsoleError> {
        self.questions.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConsoleError::Closed)
    }

    async fn write_line(&self, text: &str) -> Result<(), ConsoleError> {
        let mut output = self.output.lock().unwrap();
        output.push_str(text);
        output.push('\n');
        Ok(())
    }
}

// ============================================================================
// Counting Connection
// ============================================================================

/// Connection handle that counts how often it was released
#[derive(Default)]
pub struct CountingConnection {
    releases: AtomicUsize,
}

impl CountingConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreConnection for CountingConnection {
    async fn release(&self) -> Result<(), DomainError> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
