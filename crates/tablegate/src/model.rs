use crate::{Result, Row, Table};

/// An in-memory representation of one record.
///
/// Every attribute of a model maps to exactly one column of
/// [`Model::Table`]. `populate` overwrites every attribute, so populating a
/// model twice from the same row leaves it unchanged.
pub trait Model: Default {
    /// The table records of this model are stored in.
    type Table: Table;

    /// Copies the values of `row` into the model's attributes.
    ///
    /// Fails if a column is missing or holds a value of the wrong type.
    fn populate(&mut self, row: &Row) -> Result<&mut Self>;

    /// The model's attributes keyed by column name.
    fn to_row(&self) -> Row;

    /// Creates a fresh instance populated from `row`.
    fn from_row(row: &Row) -> Result<Self> {
        let mut model = Self::default();
        model.populate(row)?;
        Ok(model)
    }
}
