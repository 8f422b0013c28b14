//! Criterion trait and the concrete criteria behind the factories.

mod compare;
mod flag_set;
mod junction;
mod reverse_ilike;
mod size;
mod sql;

use std::fmt;

pub use compare::{Between, Compare, IsNull, Like};
pub use flag_set::FlagSetRestriction;
pub use junction::{Junction, Not};
pub use reverse_ilike::ReverseIlike;
pub use size::SizeRestriction;
pub use sql::SqlRestriction;

use crate::{error::Result, query::CriteriaQuery, value::SqlValue};

/// A renderable query predicate.
///
/// A criterion renders a SQL fragment with `?` placeholders through
/// [`to_sql`](Criterion::to_sql) and supplies the values bound to those
/// placeholders, in order, through [`bind_values`](Criterion::bind_values).
/// For any given query the two always agree on count.
pub trait Criterion: fmt::Debug + Send + Sync {
    /// Renders the SQL fragment for this criterion.
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String>;

    /// Returns the values bound to the fragment's placeholders.
    fn bind_values(&self, query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>>;
}

/// Binary comparison operators as rendered in SQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl ComparisonOp {
    /// Returns the SQL symbol of the operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::Le => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
        }
    }

    /// Returns the operator with its operands swapped.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ComparisonOp::Eq => ComparisonOp::Eq,
            ComparisonOp::Ne => ComparisonOp::Ne,
            ComparisonOp::Lt => ComparisonOp::Gt,
            ComparisonOp::Le => ComparisonOp::Ge,
            ComparisonOp::Gt => ComparisonOp::Lt,
            ComparisonOp::Ge => ComparisonOp::Le,
        }
    }

    /// Returns the logical negation of the operator.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            ComparisonOp::Eq => ComparisonOp::Ne,
            ComparisonOp::Ne => ComparisonOp::Eq,
            ComparisonOp::Lt => ComparisonOp::Ge,
            ComparisonOp::Le => ComparisonOp::Gt,
            ComparisonOp::Gt => ComparisonOp::Le,
            ComparisonOp::Ge => ComparisonOp::Lt,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Bitwise operators usable in flag-set restrictions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOp {
    /// `&`
    And,
    /// `|`
    Or,
}

impl fmt::Display for BitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitOp::And => "&",
            BitOp::Or => "|",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_render_as_sql() {
        assert_eq!(ComparisonOp::Eq.to_string(), "=");
        assert_eq!(ComparisonOp::Ne.to_string(), "<>");
        assert_eq!(ComparisonOp::Ge.to_string(), ">=");
        assert_eq!(BitOp::And.to_string(), "&");
    }

    #[test]
    fn flipping_swaps_operand_order() {
        assert_eq!(ComparisonOp::Lt.flipped(), ComparisonOp::Gt);
        assert_eq!(ComparisonOp::Ge.flipped(), ComparisonOp::Le);
        assert_eq!(ComparisonOp::Eq.flipped(), ComparisonOp::Eq);
    }

    #[test]
    fn negation_inverts_the_predicate() {
        assert_eq!(ComparisonOp::Eq.negated(), ComparisonOp::Ne);
        assert_eq!(ComparisonOp::Le.negated(), ComparisonOp::Gt);
    }
}
