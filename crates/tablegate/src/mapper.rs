use crate::{Criteria, DbTable, Error, Model, Result, Value};

use std::{fmt, marker::PhantomData};

/// Translates between the rows of a [`DbTable`] and instances of `M`.
///
/// A mapper starts out either bound to a gateway ([`Mapper::new`]) or
/// unbound ([`Mapper::unbound`]). Operations on an unbound mapper fail with
/// an invalid state error until [`Mapper::set_db_table`] is called.
pub struct Mapper<M: Model> {
    db_table: Option<DbTable<M::Table>>,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> Mapper<M> {
    pub fn new(db_table: DbTable<M::Table>) -> Mapper<M> {
        Mapper {
            db_table: Some(db_table),
            _model: PhantomData,
        }
    }

    pub fn unbound() -> Mapper<M> {
        Mapper {
            db_table: None,
            _model: PhantomData,
        }
    }

    pub fn set_db_table(&mut self, db_table: DbTable<M::Table>) -> &mut Self {
        self.db_table = Some(db_table);
        self
    }

    pub fn db_table(&mut self) -> Result<&mut DbTable<M::Table>> {
        self.db_table
            .as_mut()
            .ok_or_else(|| Error::invalid_state("DbTable was not set"))
    }

    /// Models whose primary key equals `value`.
    pub fn find(&mut self, value: impl Into<Value>) -> Result<Vec<M>> {
        let rows = self.db_table()?.find(value)?;
        hydrate(&rows)
    }

    /// Models whose `column` equals `value`.
    pub fn find_by(&mut self, column: &str, value: impl Into<Value>) -> Result<Vec<M>> {
        let rows = self.db_table()?.find_by(column, value)?;
        hydrate(&rows)
    }

    /// Populates `model` from the first row matching `criteria`.
    ///
    /// Returns `false` when no row matches. `model` is only written once the
    /// whole row converts, so it is left untouched on `false` or on error.
    pub fn find_row(&mut self, model: &mut M, criteria: &Criteria) -> Result<bool> {
        let Some(row) = self.db_table()?.find_row(criteria)? else {
            return Ok(false);
        };

        *model = M::from_row(&row)?;
        Ok(true)
    }

    /// One new model per row matching `criteria`, in row order.
    pub fn find_all(&mut self, criteria: &Criteria) -> Result<Vec<M>> {
        let rows = self.db_table()?.find_all(criteria)?;
        hydrate(&rows)
    }

    /// See [`DbTable::update`].
    pub fn update(&mut self, set: &str, filter: Option<&str>) -> Result<u64> {
        self.db_table()?.update(set, filter)
    }

    /// See [`DbTable::delete`].
    pub fn delete(&mut self, filter: Option<&str>) -> Result<u64> {
        self.db_table()?.delete(filter)
    }

    /// See [`DbTable::insert`].
    pub fn insert(&mut self, columns: &str, values: &str) -> Result<u64> {
        self.db_table()?.insert(columns, values)
    }
}

fn hydrate<M: Model>(rows: &[crate::Row]) -> Result<Vec<M>> {
    rows.iter().map(M::from_row).collect()
}

impl<M: Model> Default for Mapper<M> {
    fn default() -> Self {
        Mapper::unbound()
    }
}

impl<M: Model> fmt::Debug for Mapper<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("db_table", &self.db_table)
            .finish()
    }
}
