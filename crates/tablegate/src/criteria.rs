use tablegate_core::stmt::{Filter, Limit, Query, SqlFragment};

/// Narrows down the rows read by
/// [`DbTable::find_all`](crate::DbTable::find_all) and
/// [`DbTable::find_row`](crate::DbTable::find_row).
///
/// `filter` and `order_by` are [`SqlFragment`]s and are written into the
/// statement verbatim. A blank fragment is the same as no fragment.
///
/// ```
/// use tablegate::Criteria;
///
/// let criteria = Criteria::new()
///     .filter("\"price\" > 0.5")
///     .order_by("\"label\"")
///     .limit(10);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Criteria {
    filter: Option<SqlFragment>,
    order_by: Option<SqlFragment>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Criteria {
    /// Matches every row, in the database's natural order.
    pub fn new() -> Criteria {
        Criteria::default()
    }

    pub fn filter(mut self, filter: impl Into<SqlFragment>) -> Criteria {
        self.filter = non_blank(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<SqlFragment>) -> Criteria {
        self.order_by = non_blank(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Criteria {
        self.limit = Some(limit);
        self
    }

    /// Rows to skip. Only takes effect together with [`Criteria::limit`].
    pub fn offset(mut self, offset: u64) -> Criteria {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn to_query(&self, table: &str) -> Query {
        Query::all(table)
            .filter(Filter::sql(self.filter.clone()))
            .order_by(self.order_by.clone())
            .limit(self.limit.map(|limit| Limit::new(limit, self.offset)))
    }
}

pub(crate) fn non_blank(fragment: SqlFragment) -> Option<SqlFragment> {
    if fragment.is_blank() {
        None
    } else {
        Some(fragment)
    }
}
