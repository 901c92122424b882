use super::SqlFragment;

/// `INSERT INTO <table> (<columns>) VALUES (<values>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: SqlFragment,
    pub values: SqlFragment,
}
