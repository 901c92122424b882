mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tablegate_core::{
    driver::{Driver, Response},
    stmt::Statement,
    ConnectionConfig, Error, Result, Row,
};
use tablegate_sql::Serializer;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create a driver from connection parameters.
    ///
    /// SQLite is file based: `dbname` is the database path (`:memory:` for an
    /// in-memory database) and the remaining parameters are not used.
    pub fn from_config(config: &ConnectionConfig) -> Self {
        if config.dbname == ":memory:" {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(&config.dbname))
        }
    }

    /// Create an in-memory SQLite database
    ///
    /// Every connection opened by this driver gets its own, empty database.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn tablegate_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        let sqlite = Self { connection };
        Ok(sqlite)
    }

    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut record = Row::with_capacity(names.len());

            for (index, name) in names.iter().enumerate() {
                record.insert(name.as_str(), Value::from_sql(row, index)?.into_inner());
            }

            ret.push(record);
        }

        Ok(ret)
    }
}

impl tablegate_core::Connection for Connection {
    fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        let mut params: Vec<tablegate_core::Value> = vec![];
        let sql = Serializer::sqlite().serialize(stmt, &mut params);

        log::debug!("sqlite exec; sql={sql}; params={params:?}");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        if stmt.returns_rows() {
            let rows = self.query(&sql, &params)?;
            log::trace!("sqlite returned {} rows", rows.len());
            return Ok(Response::values(rows));
        }

        let count = self
            .connection
            .execute(&sql, rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        log::trace!("sqlite affected {count} rows");
        Ok(Response::count(count as _))
    }

    fn exec_script(&mut self, sql: &str) -> Result<()> {
        log::debug!("sqlite exec script; len={}", sql.len());

        self.connection.execute_batch(sql).map_err(Error::driver)
    }
}
