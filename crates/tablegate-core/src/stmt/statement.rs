use super::{Delete, Insert, Query, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Query),
    Update(Update),
    Delete(Delete),
    Insert(Insert),
}

impl Statement {
    /// Returns `true` if executing the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Query(_))
    }

    /// The table the statement operates on.
    pub fn table(&self) -> &str {
        match self {
            Statement::Query(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
        }
    }
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Statement::Query(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
