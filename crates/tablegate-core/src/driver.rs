mod response;
pub use response::{Response, Rows};

use crate::{stmt::Statement, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one database.
///
/// A driver is the connection provider handed to a gateway. The gateway
/// calls [`Driver::connect`] the first time it needs to talk to the database
/// and keeps the returned connection for the rest of its life.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL the driver connects to, with any password redacted.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection.
pub trait Connection: Debug + Send + 'static {
    /// Serializes `stmt` for this database and executes it.
    ///
    /// Queries respond with rows, every other statement with the number of
    /// rows it affected.
    fn exec(&mut self, stmt: &Statement) -> Result<Response>;

    /// Executes a batch of `;`-separated SQL statements without parameters.
    fn exec_script(&mut self, sql: &str) -> Result<()>;
}
