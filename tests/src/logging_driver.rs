use std::{
    borrow::Cow,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tablegate::{
    driver::{Connection, Driver, Response},
    stmt::Statement,
    Result,
};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Arc<dyn Driver>,

    /// Log of all statements executed through connections of this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,

    /// Number of connections opened so far
    connects: Arc<AtomicUsize>,
}

impl LoggingDriver {
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            connects: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }

    pub fn connects_handle(&self) -> Arc<AtomicUsize> {
        self.connects.clone()
    }
}

impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        let inner = self.inner.connect()?;
        self.connects.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(LoggingConnection {
            inner,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One executed statement and what came back.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub statement: Statement,
    pub response: Result<Response>,
}

/// A connection wrapper that logs all statements for testing purposes
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes statements
    inner: Box<dyn Connection>,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl Connection for LoggingConnection {
    fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        let response = self.inner.exec(stmt);

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                statement: stmt.clone(),
                response: response.clone(),
            });

        response
    }

    fn exec_script(&mut self, sql: &str) -> Result<()> {
        self.inner.exec_script(sql)
    }
}
