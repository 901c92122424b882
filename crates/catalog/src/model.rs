mod category;
pub use category::{Category, CategoryTable};

mod product;
pub use product::{Product, ProductTable};
