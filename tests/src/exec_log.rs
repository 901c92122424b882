use crate::logging_driver::DriverOp;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tablegate::stmt::Statement;

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
    connects: Arc<AtomicUsize>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>, connects: Arc<AtomicUsize>) -> Self {
        Self { ops, connects }
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Number of connections opened through the driver
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Check if any statement matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Statement) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.statement))
    }

    /// Count statements matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Statement) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.statement))
            .count()
    }

    pub fn has_query(&self) -> bool {
        self.any(|stmt| matches!(stmt, Statement::Query(_)))
    }

    pub fn has_update(&self) -> bool {
        self.any(|stmt| matches!(stmt, Statement::Update(_)))
    }

    pub fn has_delete(&self) -> bool {
        self.any(|stmt| matches!(stmt, Statement::Delete(_)))
    }

    pub fn has_insert(&self) -> bool {
        self.any(|stmt| matches!(stmt, Statement::Insert(_)))
    }

    /// The most recent operation, if any
    pub fn last(&self) -> Option<DriverOp> {
        self.ops.lock().unwrap().last().cloned()
    }

    /// Remove and return the oldest operation
    pub fn pop(&self) -> DriverOp {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "no statement was logged");
        ops.remove(0)
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
