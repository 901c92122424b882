use super::SqlFragment;
use crate::Value;

/// The `WHERE` clause of a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Filter {
    /// No `WHERE` clause; every row matches.
    #[default]
    All,

    /// `<column> = ?` with `value` bound as a parameter.
    Eq { column: String, value: Value },

    /// Caller-supplied condition, written verbatim.
    Sql(SqlFragment),
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// A verbatim condition, or [`Filter::All`] when `sql` is `None`.
    pub fn sql(sql: Option<SqlFragment>) -> Filter {
        match sql {
            Some(sql) => Filter::Sql(sql),
            None => Filter::All,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}
