//! Choosing and configuring the database the catalog lives in.

use std::{path::Path, sync::Arc};
use tablegate::{
    driver::{self, Driver, PostgreSQL, Sqlite},
    ConnectionConfig, Result,
};

/// SQLite database used when nothing else is configured.
pub const DEFAULT_SQLITE_PATH: &str = "catalog.db";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    #[default]
    Sqlite,
    Postgresql,
}

impl Backend {
    /// The backend a connection URL points at.
    pub fn from_url(url: &str) -> Option<Backend> {
        let (scheme, _) = url.split_once(':')?;

        match scheme {
            "sqlite" => Some(Backend::Sqlite),
            "postgresql" | "postgres" => Some(Backend::Postgresql),
            _ => None,
        }
    }

    /// Builds a driver from connection parameters.
    ///
    /// For SQLite the `dbname` parameter is the database file.
    pub fn driver(self, config: &ConnectionConfig) -> Arc<dyn Driver> {
        match self {
            Backend::Sqlite => Arc::new(Sqlite::from_config(config)),
            Backend::Postgresql => Arc::new(PostgreSQL::from_config(config.clone())),
        }
    }
}

/// Where the connection parameters come from, in order of precedence.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub backend: Backend,

    /// A `sqlite:` or `postgresql:` URL.
    pub database_url: Option<String>,

    /// A JSON file holding a connection parameter object.
    pub config_file: Option<std::path::PathBuf>,
}

impl Settings {
    /// Resolves the settings into a driver.
    ///
    /// A URL wins over a config file. Without either, SQLite falls back to
    /// [`DEFAULT_SQLITE_PATH`] while PostgreSQL fails.
    pub fn driver(&self) -> Result<Arc<dyn Driver>> {
        if let Some(url) = &self.database_url {
            return driver::connect(url);
        }

        if let Some(path) = &self.config_file {
            let config = load_config(path)?;
            return Ok(self.backend.driver(&config));
        }

        match self.backend {
            Backend::Sqlite => Ok(Arc::new(Sqlite::open(DEFAULT_SQLITE_PATH))),
            Backend::Postgresql => tablegate::bail!(
                "postgresql needs connection parameters; pass --config or --database-url"
            ),
        }
    }

    /// The backend the resolved driver talks to.
    pub fn effective_backend(&self) -> Backend {
        self.database_url
            .as_deref()
            .and_then(Backend::from_url)
            .unwrap_or(self.backend)
    }
}

/// Reads connection parameters from a JSON file.
pub fn load_config(path: &Path) -> Result<ConnectionConfig> {
    let src = std::fs::read_to_string(path)
        .map_err(|err| tablegate::Error::from(err).context(tablegate::err!("{}", path.display())))?;

    ConnectionConfig::from_json(&src)
        .map_err(|err| err.context(tablegate::err!("{}", path.display())))
}
