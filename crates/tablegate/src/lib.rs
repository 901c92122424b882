mod criteria;
pub use criteria::Criteria;

mod db_table;
pub use db_table::DbTable;

pub mod driver;

mod mapper;
pub use mapper::Mapper;

mod model;
pub use model::Model;

mod table;
pub use table::Table;

pub use tablegate_core::{
    bail, err,
    stmt::{self, SqlFragment, Statement},
    ConnectionConfig, Error, Result, Row, Value,
};
