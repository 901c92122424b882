use crate::{Error, Result, Value};

use indexmap::IndexMap;

/// One result row: column names mapped to values, in the order the
/// database returned the columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn with_capacity(capacity: usize) -> Row {
        Row {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `column` to `value`, returning the previous value if any.
    ///
    /// Re-inserting an existing column keeps its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.columns.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Reads `column` and converts it to `T`.
    pub fn get_as<'a, T>(&'a self, column: &str) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = Error>,
    {
        let value = self
            .columns
            .get(column)
            .ok_or_else(|| Error::missing_column(column))?;

        T::try_from(value).map_err(|err| err.context(crate::err!("column `{column}`")))
    }

    /// Like [`Row::get_as`], but a `NULL` column reads as `None`.
    pub fn get_opt<'a, T>(&'a self, column: &str) -> Result<Option<T>>
    where
        T: TryFrom<&'a Value, Error = Error>,
    {
        match self.get(column) {
            Some(Value::Null) => Ok(None),
            _ => self.get_as(column).map(Some),
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
