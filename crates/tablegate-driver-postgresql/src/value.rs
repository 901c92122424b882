use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use postgres::{Column, Row};
use tablegate_core::{Error, Result, Value as CoreValue};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

#[derive(Debug)]
pub struct Value(pub(crate) CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        // The parameter type is inferred by the server from the statement,
        // so values are narrowed or widened to whatever the column uses.
        match &self.0 {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::Bool(value) => value.to_sql(ty, out),
            CoreValue::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                Type::INT8 => value.to_sql(ty, out),
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                Type::BOOL => (*value != 0).to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
            CoreValue::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => value.to_sql(ty, out),
                Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
                    value.to_string().to_sql(ty, out)
                }
                _ => Err(mismatch(&self.0, ty)),
            },
            CoreValue::String(value) => match *ty {
                Type::INT2 => value.trim().parse::<i16>()?.to_sql(ty, out),
                Type::INT4 => value.trim().parse::<i32>()?.to_sql(ty, out),
                Type::INT8 => value.trim().parse::<i64>()?.to_sql(ty, out),
                Type::FLOAT4 => value.trim().parse::<f32>()?.to_sql(ty, out),
                Type::FLOAT8 => value.trim().parse::<f64>()?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::Bytes(value) => value.to_sql(ty, out),
        }
    }

    accepts!(BOOL, INT2, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR, BPCHAR, NAME, BYTEA);
    to_sql_checked!();
}

fn mismatch(value: &CoreValue, ty: &Type) -> BoxError {
    format!("cannot bind {} to a `{}` parameter", value.type_name(), ty).into()
}

/// Converts a PostgreSQL value within a row to a core value.
pub(crate) fn from_sql(row: &Row, index: usize, column: &Column) -> Result<CoreValue> {
    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so we must manually match each type like so.
    let ty = column.type_();

    let value = if *ty == Type::TEXT
        || *ty == Type::VARCHAR
        || *ty == Type::BPCHAR
        || *ty == Type::NAME
    {
        get::<String>(row, index)?.map(CoreValue::String)
    } else if *ty == Type::BOOL {
        get::<bool>(row, index)?.map(CoreValue::Bool)
    } else if *ty == Type::INT2 {
        get::<i16>(row, index)?.map(|v| CoreValue::I64(v as i64))
    } else if *ty == Type::INT4 {
        get::<i32>(row, index)?.map(|v| CoreValue::I64(v as i64))
    } else if *ty == Type::INT8 {
        get::<i64>(row, index)?.map(CoreValue::I64)
    } else if *ty == Type::FLOAT4 {
        get::<f32>(row, index)?.map(|v| CoreValue::F64(v as f64))
    } else if *ty == Type::FLOAT8 {
        get::<f64>(row, index)?.map(CoreValue::F64)
    } else if *ty == Type::BYTEA {
        get::<Vec<u8>>(row, index)?.map(CoreValue::Bytes)
    } else {
        tablegate_core::bail!(
            "unsupported PostgreSQL type `{}` for column `{}`",
            ty,
            column.name()
        );
    };

    Ok(value.unwrap_or(CoreValue::Null))
}

fn get<'a, T>(row: &'a Row, index: usize) -> Result<Option<T>>
where
    T: postgres::types::FromSql<'a>,
{
    row.try_get::<usize, Option<T>>(index)
        .map_err(Error::driver)
}
