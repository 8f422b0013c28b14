//! Bound parameter values and the SQL column types the crate speaks.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// SQL column types understood by the criteria and codec layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    /// SQL NULL, carrying no type of its own.
    Null,
    /// `boolean`.
    Boolean,
    /// `bigint`, the storage type for bitmask flag columns.
    BigInt,
    /// `double precision`.
    Double,
    /// `varchar` and other character types.
    Varchar,
    /// `date`.
    Date,
    /// `timestamp` without time zone.
    Timestamp,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Null => "null",
            SqlType::Boolean => "boolean",
            SqlType::BigInt => "bigint",
            SqlType::Double => "double precision",
            SqlType::Varchar => "varchar",
            SqlType::Date => "date",
            SqlType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// A value bound to a `?` placeholder of a rendered SQL fragment.
///
/// Criteria never inline bound values into SQL text; they return them in
/// placeholder order from [`Criterion::bind_values`](crate::Criterion::bind_values)
/// for the host to bind.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit integer value.
    Int64(i64),
    /// 64-bit floating point value.
    Float64(f64),
    /// Character value.
    Text(String),
    /// Calendar date without a time component.
    Date(NaiveDate),
    /// Timestamp without time zone.
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Returns the SQL type this value binds as.
    #[must_use]
    pub fn sql_type(&self) -> SqlType {
        match self {
            SqlValue::Null => SqlType::Null,
            SqlValue::Boolean(_) => SqlType::Boolean,
            SqlValue::Int64(_) => SqlType::BigInt,
            SqlValue::Float64(_) => SqlType::Double,
            SqlValue::Text(_) => SqlType::Varchar,
            SqlValue::Date(_) => SqlType::Date,
            SqlValue::Timestamp(_) => SqlType::Timestamp,
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Boolean(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int64(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int64(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float64(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(SqlValue::from(true), SqlValue::Boolean(true));
        assert_eq!(SqlValue::from(7i32), SqlValue::Int64(7));
        assert_eq!(SqlValue::from(7i64), SqlValue::Int64(7));
        assert_eq!(SqlValue::from("abc"), SqlValue::Text("abc".to_owned()));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some("x")), SqlValue::Text("x".to_owned()));
    }

    #[test]
    fn sql_type_tracks_the_variant() {
        assert_eq!(SqlValue::Null.sql_type(), SqlType::Null);
        assert_eq!(SqlValue::Int64(1).sql_type(), SqlType::BigInt);
        assert_eq!(SqlValue::Text(String::new()).sql_type(), SqlType::Varchar);
    }
}
