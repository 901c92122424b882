use super::SqlFragment;

/// `DELETE FROM <table> [WHERE <filter>]`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Option<SqlFragment>,
}
