//! A small product catalog stored in `pm_product` and `pm_category`.

mod model;
pub use model::{Category, CategoryTable, Product, ProductTable};

pub mod schema;

pub mod settings;
pub use settings::Backend;

pub mod walkthrough;

use std::sync::Arc;
use tablegate::{driver::Driver, DbTable, Mapper, Result};

/// Product and category mappers sharing one driver.
pub fn mappers(driver: Arc<dyn Driver>) -> (Mapper<Product>, Mapper<Category>) {
    (
        Mapper::new(DbTable::with_driver(driver.clone())),
        Mapper::new(DbTable::with_driver(driver)),
    )
}

/// Loads the category `product` belongs to.
///
/// Products only carry the category id; resolving it costs one query.
pub fn category_of(
    categories: &mut Mapper<Category>,
    product: &Product,
) -> Result<Option<Category>> {
    Ok(categories.find(product.category_id)?.into_iter().next())
}
