//! Fixture tables for the catalog.
//!
//! Column names are camel case, so every identifier is double quoted. Both
//! SQLite and PostgreSQL accept that form.

use crate::Backend;
use tablegate::{driver::Connection, Result};

/// Categories, in id order.
pub const CATEGORIES: [&str; 2] = ["fruit", "vegetable"];

/// Products as `(label, categoryId, price)`, in id order.
pub const PRODUCTS: [(&str, i64, f64); 5] = [
    ("apple", 1, 0.15),
    ("pineapple", 1, 0.95),
    ("banana", 1, 0.2),
    ("carrot", 2, 0.45),
    ("potato", 2, 0.3),
];

fn id_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        Backend::Postgresql => "SERIAL PRIMARY KEY",
    }
}

/// Creates `pm_category` and `pm_product` unless they already exist.
pub fn create_tables(connection: &mut dyn Connection, backend: Backend) -> Result<()> {
    let id = id_column(backend);

    connection.exec_script(&format!(
        r#"CREATE TABLE IF NOT EXISTS "pm_category" (
            "categoryId" {id},
            "category" VARCHAR(64) NOT NULL
        );
        CREATE TABLE IF NOT EXISTS "pm_product" (
            "productId" {id},
            "label" VARCHAR(64) NOT NULL,
            "categoryId" INTEGER NOT NULL REFERENCES "pm_category" ("categoryId"),
            "price" DOUBLE PRECISION NOT NULL
        );"#
    ))
}

pub fn drop_tables(connection: &mut dyn Connection) -> Result<()> {
    connection.exec_script(
        r#"DROP TABLE IF EXISTS "pm_product";
        DROP TABLE IF EXISTS "pm_category";"#,
    )
}

/// Inserts the fixture rows. Ids are assigned by the database, starting at 1
/// on fresh tables.
pub fn seed(connection: &mut dyn Connection) -> Result<()> {
    let categories = CATEGORIES
        .iter()
        .map(|category| format!("('{category}')"))
        .collect::<Vec<_>>()
        .join(", ");

    let products = PRODUCTS
        .iter()
        .map(|(label, category_id, price)| format!("('{label}', {category_id}, {price})"))
        .collect::<Vec<_>>()
        .join(", ");

    connection.exec_script(&format!(
        r#"INSERT INTO "pm_category" ("category") VALUES {categories};
        INSERT INTO "pm_product" ("label", "categoryId", "price") VALUES {products};"#
    ))
}

/// Drops, recreates and seeds both tables.
pub fn reset(connection: &mut dyn Connection, backend: Backend) -> Result<()> {
    log::debug!("resetting catalog schema; backend={backend:?}");

    drop_tables(connection)?;
    create_tables(connection, backend)?;
    seed(connection)
}
