use catalog::Backend;
use std::sync::Arc;
use tablegate::driver::{Driver, Sqlite};
use tempfile::TempDir;

use crate::Setup;

/// A SQLite file in a temporary directory, removed when the setup is dropped.
///
/// In-memory databases are private to one connection, while every gateway
/// opens its own, so a file is needed for gateways to see each other's
/// writes.
pub struct SetupSqlite {
    dir: TempDir,
}

impl SetupSqlite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temporary directory"),
        }
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup for SetupSqlite {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    fn driver(&self) -> tablegate::Result<Arc<dyn Driver>> {
        Ok(Arc::new(Sqlite::open(self.dir.path().join("catalog.db"))))
    }
}
