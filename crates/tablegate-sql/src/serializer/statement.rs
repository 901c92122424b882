use super::{Formatter, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let order_by = self.order_by.as_ref().map(|order_by| (" ORDER BY ", order_by));
        let limit = self.limit.as_ref().map(|limit| (" ", limit));

        fmt!(f, "SELECT * FROM " table_name (&self.filter) order_by limit);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Filter::All => {}
            stmt::Filter::Eq { column, value } => {
                let column = Ident(column);
                let placeholder = f.params.push(value);
                fmt!(f, " WHERE " column " = " placeholder);
            }
            stmt::Filter::Sql(expr) => fmt!(f, " WHERE " expr),
        }
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "LIMIT " (self.limit) " OFFSET " (self.offset));
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));

        fmt!(f, "UPDATE " table_name " SET " (&self.assignments) filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));

        fmt!(f, "DELETE FROM " table_name filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table_name = Ident(&self.table);

        fmt!(f, "INSERT INTO " table_name " (" (&self.columns) ") VALUES (" (&self.values) ")");
    }
}
