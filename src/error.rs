//! Crate-wide error type.

use thiserror::Error;

use crate::value::SqlType;

/// Errors raised while rendering criteria, resolving properties, or
/// decoding column values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    /// The query cannot resolve the named property to any column.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The query holds no collection metadata for the named property.
    #[error("unknown collection property: {0}")]
    UnknownCollection(String),

    /// An operation that works on exactly one column was handed a property
    /// mapped to a different number of columns.
    #[error("{operation} requires a single-column property, but '{property}' resolves to {columns} columns")]
    SingleColumnRequired {
        /// Operation that needed the single column.
        operation: &'static str,
        /// Offending property name.
        property: String,
        /// Number of columns the property resolved to.
        columns: usize,
    },

    /// The operator cannot be applied to the given kind of restriction.
    #[error("unsupported operator {operator} for {subject} restrictions")]
    UnsupportedOperator {
        /// SQL symbol of the rejected operator.
        operator: &'static str,
        /// Kind of restriction that rejected it.
        subject: &'static str,
    },

    /// A column value did not carry the type a codec expected.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Type the codec expected to read.
        expected: SqlType,
        /// Type actually read.
        actual: SqlType,
    },
}

/// Convenience alias for results carrying [`CriteriaError`].
pub type Result<T> = std::result::Result<T, CriteriaError>;
