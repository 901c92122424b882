//! The catalog tour: list, filter, update, delete and re-insert products.

use crate::{Category, Product};
use std::io::Write;
use tablegate::{Criteria, Mapper, Result};

/// Runs the tour against seeded tables, writing a report to `out`.
///
/// Every change is undone before returning: apple goes back to 0.15 and
/// pineapple is inserted again after being removed.
pub fn run(
    out: &mut impl Write,
    products: &mut Mapper<Product>,
    categories: &mut Mapper<Category>,
) -> Result<()> {
    writeln!(out, "1. List all products in table")?;
    let all = products.find_all(&Criteria::new())?;
    display_products(out, &all)?;

    writeln!(out, "2. List all products in the 'vegetable' category")?;
    let mut vegetable = Category::default();
    let is_vegetable = Criteria::new().filter(r#""category" = 'vegetable'"#);
    if !categories.find_row(&mut vegetable, &is_vegetable)? {
        tablegate::bail!("category `vegetable` not found");
    }
    let vegetables = products.find_by("categoryId", vegetable.category_id)?;
    display_products(out, &vegetables)?;

    writeln!(out, "3. Update the product 'apple' and set its price to 0.24")?;
    let apple = Criteria::new().filter(r#""label" = 'apple'"#);

    let mut old_apple = Product::default();
    if !products.find_row(&mut old_apple, &apple)? {
        tablegate::bail!("product `apple` not found");
    }
    writeln!(
        out,
        "Product \"{}\" used to cost \"{}\"",
        old_apple.label, old_apple.price
    )?;

    products.update(r#""price" = 0.24"#, Some(r#""label" = 'apple'"#))?;

    let mut new_apple = Product::default();
    if !products.find_row(&mut new_apple, &apple)? {
        tablegate::bail!("product `apple` not found");
    }
    writeln!(
        out,
        "Product \"{}\" costs now \"{}\"",
        new_apple.label, new_apple.price
    )?;

    products.update(r#""price" = 0.15"#, Some(r#""label" = 'apple'"#))?;

    writeln!(out, "4. Remove product 'pineapple' from the product table")?;
    products.delete(Some(r#""label" = 'pineapple'"#))?;
    let remaining = products.find_all(&Criteria::new())?;
    display_products(out, &remaining)?;

    products.insert(r#""label", "categoryId", "price""#, "'pineapple', 1, 0.95")?;

    Ok(())
}

/// Writes one line per product.
pub fn display_products(out: &mut impl Write, products: &[Product]) -> Result<()> {
    writeln!(out, "All Products:")?;

    for product in products {
        writeln!(
            out,
            "  - Label: \"{}\", categoryId: \"{}\", price: \"{}\"",
            product.label, product.category_id, product.price
        )?;
    }

    Ok(())
}
