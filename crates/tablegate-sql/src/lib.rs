pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use tablegate_core::stmt::{self, Statement};
