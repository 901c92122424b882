#[macro_use]
mod macros;

pub mod db;

mod db_test;
pub use db_test::DbTest;

mod exec_log;
pub use exec_log::ExecLog;

pub mod logging_driver;

pub mod prelude;

use catalog::Backend;
use std::sync::Arc;
use tablegate::driver::Driver;

/// A database the integration tests can run against.
pub trait Setup: 'static {
    /// The backend, used to pick fixture DDL.
    fn backend(&self) -> Backend;

    /// A driver whose connections all reach the same database.
    fn driver(&self) -> tablegate::Result<Arc<dyn Driver>>;
}
