use crate::{Error, Result};

pub use tablegate_core::driver::{Connection, Driver, Response, Rows};

#[cfg(feature = "postgresql")]
pub use tablegate_driver_postgresql::PostgreSQL;

#[cfg(feature = "sqlite")]
pub use tablegate_driver_sqlite::Sqlite;

use std::sync::Arc;
use url::Url;

/// Picks a built-in driver from the scheme of `url`.
///
/// `sqlite:` and `postgresql:` (or `postgres:`) URLs are recognized. The
/// matching cargo feature must be enabled.
pub fn connect(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => connect_postgresql(url),
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
fn connect_postgresql(url: &str) -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(PostgreSQL::new(url)?))
}

#[cfg(not(feature = "postgresql"))]
fn connect_postgresql(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(crate::err!("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(crate::err!("`sqlite` feature not enabled"))
}
