/// `LIMIT` / `OFFSET` of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return.
    pub limit: u64,

    /// Number of rows to skip first.
    pub offset: u64,
}

impl Limit {
    pub fn new(limit: u64, offset: Option<u64>) -> Limit {
        Limit {
            limit,
            offset: offset.unwrap_or(0),
        }
    }
}
