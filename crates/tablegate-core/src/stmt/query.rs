use super::{Filter, Limit, SqlFragment};

/// `SELECT * FROM <table> [WHERE ..] [ORDER BY ..] [LIMIT .. OFFSET ..]`
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: String,
    pub filter: Filter,
    pub order_by: Option<SqlFragment>,
    pub limit: Option<Limit>,
}

impl Query {
    /// Selects every row of `table`.
    pub fn all(table: impl Into<String>) -> Query {
        Query {
            table: table.into(),
            filter: Filter::All,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Query {
        self.filter = filter;
        self
    }

    pub fn order_by(mut self, order_by: Option<SqlFragment>) -> Query {
        self.order_by = order_by;
        self
    }

    pub fn limit(mut self, limit: Option<Limit>) -> Query {
        self.limit = limit;
        self
    }
}
