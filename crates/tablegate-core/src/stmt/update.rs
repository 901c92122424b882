use super::SqlFragment;

/// `UPDATE <table> SET <assignments> [WHERE <filter>]`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: SqlFragment,
    pub filter: Option<SqlFragment>,
}
