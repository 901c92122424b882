use tablegate::{Model, Result, Row, Table};

pub struct CategoryTable;

impl Table for CategoryTable {
    fn table_name() -> &'static str {
        "pm_category"
    }

    fn primary_key() -> &'static str {
        "categoryId"
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Category {
    pub category_id: i64,
    pub category: String,
}

impl Model for Category {
    type Table = CategoryTable;

    fn populate(&mut self, row: &Row) -> Result<&mut Self> {
        self.category_id = row.get_as("categoryId")?;
        self.category = row.get_as("category")?;
        Ok(self)
    }

    fn to_row(&self) -> Row {
        Row::from_iter([
            ("categoryId", tablegate::Value::from(self.category_id)),
            ("category", tablegate::Value::from(&self.category)),
        ])
    }
}
