/// Describes one database table.
///
/// Implemented by zero-sized marker types, one per table, and used as the
/// type parameter of [`DbTable`](crate::DbTable):
///
/// ```
/// use tablegate::Table;
///
/// struct CategoryTable;
///
/// impl Table for CategoryTable {
///     fn table_name() -> &'static str {
///         "pm_category"
///     }
///
///     fn primary_key() -> &'static str {
///         "categoryId"
///     }
/// }
///
/// assert_eq!(CategoryTable::table_name(), "pm_category");
/// ```
pub trait Table: 'static {
    /// Name of the table in the database.
    fn table_name() -> &'static str;

    /// Column used by [`DbTable::find`](crate::DbTable::find).
    fn primary_key() -> &'static str {
        "id"
    }
}
