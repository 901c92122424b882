use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};
use catalog::{schema, Category, Product};
use std::sync::{atomic::AtomicUsize, Arc, Mutex};
use tablegate::{driver::Driver, DbTable, Mapper, Table};

/// One test's database.
///
/// The catalog tables are reset by [`DbTest::setup_db`]. Every statement the
/// gateways run afterwards goes through a [`LoggingDriver`].
pub struct DbTest {
    setup: Box<dyn Setup>,
    driver: Option<Arc<dyn Driver>>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    connects: Arc<AtomicUsize>,
}

impl DbTest {
    pub fn new(setup: impl Setup) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            setup: Box::new(setup),
            driver: None,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            connects: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Resets and seeds the catalog tables, returning a logging driver.
    pub fn try_setup_db(&mut self) -> tablegate::Result<Arc<dyn Driver>> {
        let driver = self.setup.driver()?;

        // Fixtures go around the log.
        let mut connection = driver.connect()?;
        schema::reset(connection.as_mut(), self.setup.backend())?;

        let logging_driver = LoggingDriver::new(driver);
        self.ops_log = logging_driver.ops_log_handle();
        self.connects = logging_driver.connects_handle();

        let driver: Arc<dyn Driver> = Arc::new(logging_driver);
        self.driver = Some(driver.clone());
        Ok(driver)
    }

    pub fn setup_db(&mut self) -> Arc<dyn Driver> {
        self.try_setup_db().unwrap()
    }

    /// A gateway for `T` on the test database.
    pub fn db_table<T: Table>(&mut self) -> DbTable<T> {
        let driver = match &self.driver {
            Some(driver) => driver.clone(),
            None => self.setup_db(),
        };

        DbTable::with_driver(driver)
    }

    /// Product and category mappers on the test database.
    pub fn mappers(&mut self) -> (Mapper<Product>, Mapper<Category>) {
        (Mapper::new(self.db_table()), Mapper::new(self.db_table()))
    }

    /// Get the statement log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone(), self.connects.clone())
    }
}
