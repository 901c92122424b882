use crate::{criteria::non_blank, Criteria, Error, Result, Row, SqlFragment, Table, Value};

use std::{fmt, marker::PhantomData, sync::Arc};
use tablegate_core::{
    driver::{Connection, Driver, Response},
    stmt::{Delete, Filter, Insert, Limit, Query, Statement, Update},
};

/// Table gateway: reads and writes the rows of the table described by `T`.
///
/// The gateway does not connect when it is created. The first operation
/// asks the driver for a connection, which is then reused until the gateway
/// is dropped or given a different driver.
pub struct DbTable<T> {
    driver: Option<Arc<dyn Driver>>,
    connection: Option<Box<dyn Connection>>,
    _table: PhantomData<fn() -> T>,
}

impl<T: Table> DbTable<T> {
    /// Creates a gateway that opens its connection through `driver`.
    pub fn new(driver: impl Driver) -> DbTable<T> {
        DbTable::with_driver(Arc::new(driver))
    }

    /// Creates a gateway sharing `driver` with other gateways.
    pub fn with_driver(driver: Arc<dyn Driver>) -> DbTable<T> {
        DbTable {
            driver: Some(driver),
            connection: None,
            _table: PhantomData,
        }
    }

    /// Creates a gateway without connection details.
    ///
    /// Every operation fails until [`DbTable::set_driver`] is called.
    pub fn unbound() -> DbTable<T> {
        DbTable {
            driver: None,
            connection: None,
            _table: PhantomData,
        }
    }

    /// Replaces the driver. An already open connection is closed.
    pub fn set_driver(&mut self, driver: Arc<dyn Driver>) -> &mut Self {
        self.driver = Some(driver);
        self.connection = None;
        self
    }

    pub fn driver(&self) -> Option<&Arc<dyn Driver>> {
        self.driver.as_ref()
    }

    pub fn table_name(&self) -> &'static str {
        T::table_name()
    }

    /// Returns `true` once a connection has been opened.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The gateway's connection, opened on first use.
    pub fn connection(&mut self) -> Result<&mut dyn Connection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => self.connect()?,
        };

        Ok(self.connection.insert(connection).as_mut())
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        let Some(driver) = &self.driver else {
            return Err(Error::invalid_state("connection details are not set"));
        };

        log::debug!(
            "opening connection; table={}; url={}",
            T::table_name(),
            driver.url()
        );

        driver.connect()
    }

    fn exec(&mut self, stmt: impl Into<Statement>) -> Result<Response> {
        self.connection()?.exec(&stmt.into())
    }

    /// Rows whose primary key equals `value`.
    pub fn find(&mut self, value: impl Into<Value>) -> Result<Vec<Row>> {
        self.find_by(T::primary_key(), value)
    }

    /// Rows whose `column` equals `value`. The value is bound as a parameter.
    pub fn find_by(&mut self, column: &str, value: impl Into<Value>) -> Result<Vec<Row>> {
        let query = Query::all(T::table_name()).filter(Filter::eq(column, value));
        self.exec(query)?.into_values()
    }

    /// The first row matching `criteria`, if any.
    ///
    /// Only one row is fetched unless `criteria` sets its own limit.
    pub fn find_row(&mut self, criteria: &Criteria) -> Result<Option<Row>> {
        let mut query = criteria.to_query(T::table_name());
        query.limit.get_or_insert(Limit::new(1, None));

        let rows = self.exec(query)?.into_values()?;
        Ok(rows.into_iter().next())
    }

    /// Every row matching `criteria`, in the order the database returns them.
    pub fn find_all(&mut self, criteria: &Criteria) -> Result<Vec<Row>> {
        let rows = self.exec(criteria.to_query(T::table_name()))?.into_values()?;
        log::trace!("{} rows read from {}", rows.len(), T::table_name());
        Ok(rows)
    }

    /// `UPDATE <table> SET <set> [WHERE <filter>]`, returning the number of
    /// rows changed.
    ///
    /// Fails without touching the database if `set` is blank.
    pub fn update(&mut self, set: &str, filter: Option<&str>) -> Result<u64> {
        let assignments = required(set, "update requires a `set` fragment")?;

        self.exec(Update {
            table: T::table_name().to_string(),
            assignments,
            filter: filter.and_then(|filter| non_blank(filter.into())),
        })?
        .into_count()
    }

    /// `DELETE FROM <table> [WHERE <filter>]`, returning the number of rows
    /// removed. Without a filter every row is deleted.
    pub fn delete(&mut self, filter: Option<&str>) -> Result<u64> {
        self.exec(Delete {
            table: T::table_name().to_string(),
            filter: filter.and_then(|filter| non_blank(filter.into())),
        })?
        .into_count()
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<values>)`, returning the
    /// number of rows inserted.
    ///
    /// Fails without touching the database if either fragment is blank.
    pub fn insert(&mut self, columns: &str, values: &str) -> Result<u64> {
        let columns = required(columns, "insert requires a `columns` fragment")?;
        let values = required(values, "insert requires a `values` fragment")?;

        self.exec(Insert {
            table: T::table_name().to_string(),
            columns,
            values,
        })?
        .into_count()
    }
}

fn required(fragment: &str, what: &str) -> Result<SqlFragment> {
    non_blank(fragment.into()).ok_or_else(|| Error::missing_argument(what))
}

impl<T: Table> Default for DbTable<T> {
    fn default() -> Self {
        DbTable::unbound()
    }
}

impl<T: Table> fmt::Debug for DbTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbTable")
            .field("table", &T::table_name())
            .field("driver", &self.driver)
            .field("connected", &self.is_connected())
            .finish()
    }
}
