//! Column codecs mapping database values to domain values.

use std::marker::PhantomData;

use crate::{
    error::{CriteriaError, Result},
    flags::{Flag, FlagSet},
    value::{SqlType, SqlValue},
};

/// Two-way mapping between one database column and a domain value.
///
/// Hosts plug codecs into their row materialization and statement binding;
/// the codec itself never touches a driver.
pub trait ColumnCodec {
    /// Domain value the codec reads and writes.
    type Value;

    /// SQL type of the backing column.
    fn sql_type(&self) -> SqlType;

    /// Decodes a value read from the column.
    fn decode(&self, value: &SqlValue) -> Result<Self::Value>;

    /// Encodes a domain value for storage, `None` meaning the value is
    /// absent on the domain side.
    fn encode(&self, value: Option<&Self::Value>) -> SqlValue;
}

/// Codec storing a [`FlagSet`] in a single `bigint` column.
///
/// SQL NULL reads as the empty set and an absent set writes the integer
/// `0`, so the column never distinguishes "no set" from "no flags".
#[derive(Clone, Copy, Debug)]
pub struct FlagSetCodec<E> {
    _marker: PhantomData<E>,
}

impl<E: Flag> FlagSetCodec<E> {
    /// Creates the codec.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E: Flag> Default for FlagSetCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Flag> ColumnCodec for FlagSetCodec<E> {
    type Value = FlagSet<E>;

    fn sql_type(&self) -> SqlType {
        SqlType::BigInt
    }

    fn decode(&self, value: &SqlValue) -> Result<FlagSet<E>> {
        match value {
            SqlValue::Null => Ok(FlagSet::empty()),
            SqlValue::Int64(mask) => Ok(FlagSet::from_mask(*mask)),
            other => Err(CriteriaError::TypeMismatch {
                expected: SqlType::BigInt,
                actual: other.sql_type(),
            }),
        }
    }

    fn encode(&self, value: Option<&FlagSet<E>>) -> SqlValue {
        SqlValue::Int64(value.map_or(0, |set| set.mask()))
    }
}
