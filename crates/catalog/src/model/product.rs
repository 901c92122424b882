use tablegate::{Model, Result, Row, Table, Value};

pub struct ProductTable;

impl Table for ProductTable {
    fn table_name() -> &'static str {
        "pm_product"
    }

    fn primary_key() -> &'static str {
        "productId"
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Product {
    pub product_id: i64,
    pub label: String,

    /// Id of the product's [`Category`](crate::Category).
    pub category_id: i64,

    pub price: f64,
}

impl Model for Product {
    type Table = ProductTable;

    fn populate(&mut self, row: &Row) -> Result<&mut Self> {
        self.product_id = row.get_as("productId")?;
        self.label = row.get_as("label")?;
        self.category_id = row.get_as("categoryId")?;
        self.price = row.get_as("price")?;
        Ok(self)
    }

    fn to_row(&self) -> Row {
        Row::from_iter([
            ("productId", Value::from(self.product_id)),
            ("label", Value::from(&self.label)),
            ("categoryId", Value::from(self.category_id)),
            ("price", Value::from(self.price)),
        ])
    }
}
