//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite values and domain types.

use roofquote_core::quote::{Quote, RoofSize};
use rusqlite::types::{Type, Value, ValueRef};
use rusqlite::Row;

/// Column index of `roof_size` in quote rows.
const ROOF_SIZE_COLUMN: usize = 3;

/// Convert a SQLite row to a Quote.
///
/// Expected columns: id, contractor_name, company, roof_size, roof_type, city, state, project_date
pub fn row_to_quote(row: &Row) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: row.get(0)?,
        contractor_name: row.get(1)?,
        company: row.get(2)?,
        roof_size: roof_size_from_sql(row.get_ref(ROOF_SIZE_COLUMN)?)?,
        roof_type: row.get(4)?,
        city: row.get(5)?,
        state: row.get(6)?,
        project_date: row.get(7)?,
    })
}

/// Convert a `roof_size` cell back into the shape it is reported with.
///
/// Integers and reals come back as numbers. Text that SQLite could not coerce
/// comes back unchanged.
pub fn roof_size_from_sql(value: ValueRef<'_>) -> rusqlite::Result<Option<RoofSize>> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(RoofSize::from(i))),
        ValueRef::Real(f) => Ok(RoofSize::from_f64(f)),
        ValueRef::Text(bytes) => Ok(Some(RoofSize::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        ))),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            ROOF_SIZE_COLUMN,
            "roof_size".to_string(),
            Type::Blob,
        )),
    }
}

/// Convert a submitted roof size into a SQLite value.
pub fn roof_size_to_sql(size: Option<&RoofSize>) -> Value {
    match size {
        None => Value::Null,
        Some(RoofSize::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(f)) => Value::Real(f),
            (None, None) => Value::Null,
        },
        Some(RoofSize::Text(s)) => Value::Text(s.clone()),
    }
}
