//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{tests, DbTest};

pub use catalog::{Category, CategoryTable, Product, ProductTable};
pub use tablegate::{stmt::Statement, Criteria, DbTable, Mapper, Model};
