//! Statements a gateway hands to a driver.
//!
//! Statements are built from a table name plus caller-supplied
//! [`SqlFragment`]s. Fragments are written into the SQL text verbatim; the
//! only value that is ever bound as a parameter is the lookup value of a
//! [`Filter::Eq`].

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod fragment;
pub use fragment::SqlFragment;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod query;
pub use query::Query;

mod statement;
pub use statement::Statement;

mod update;
pub use update::Update;
