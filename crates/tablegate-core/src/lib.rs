pub mod config;
pub use config::ConnectionConfig;

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

mod row;
pub use row::Row;

pub mod stmt;

mod value;
pub use value::Value;

/// A Result type alias that uses tablegate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
