
#[cfg(feature = "sqlite")]
pub mod sqlite;
