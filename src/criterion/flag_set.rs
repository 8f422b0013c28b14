//! Bitwise restrictions over bitmask flag columns.

use super::{BitOp, ComparisonOp, Criterion};
use crate::{
    error::Result,
    flags::{Flag, FlagSet},
    query::CriteriaQuery,
    value::SqlValue,
};

/// Bitwise restriction over a bitmask flag column.
///
/// Renders `(col <bit op> <mask> <op> <value>)` for every resolved column,
/// joined with `" and "`. The mask and comparison value are inlined integer
/// literals, so the criterion binds no values.
#[derive(Debug)]
pub struct FlagSetRestriction {
    property: String,
    bit_op: BitOp,
    mask: i64,
    op: ComparisonOp,
    value: i64,
}

impl FlagSetRestriction {
    /// Creates a restriction testing `property <bit_op> encode(flags)`
    /// against `value`.
    #[must_use]
    pub fn new<E: Flag>(
        property: impl Into<String>,
        bit_op: BitOp,
        flags: FlagSet<E>,
        op: ComparisonOp,
        value: i64,
    ) -> Self {
        Self::from_mask(property, bit_op, flags.mask(), op, value)
    }

    /// Creates a restriction from a pre-encoded mask.
    #[must_use]
    pub fn from_mask(
        property: impl Into<String>,
        bit_op: BitOp,
        mask: i64,
        op: ComparisonOp,
        value: i64,
    ) -> Self {
        Self {
            property: property.into(),
            bit_op,
            mask,
            op,
            value,
        }
    }
}

impl Criterion for FlagSetRestriction {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let columns = query.columns(&self.property)?;
        let fragments: Vec<String> = columns
            .iter()
            .map(|column| {
                format!(
                    "({column} {} {} {} {})",
                    self.bit_op, self.mask, self.op, self.value
                )
            })
            .collect();
        Ok(fragments.join(" and "))
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use strum_macros::VariantArray;

    use super::*;
    use crate::query::TableQuery;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, VariantArray)]
    enum Badge {
        Gold,
        Silver,
        Bronze,
    }

    fn query() -> TableQuery {
        TableQuery::builder("this_")
            .property("badges", "badges")
            .build()
    }

    #[test]
    fn masks_and_values_are_inlined() {
        let query = query();
        let restriction = FlagSetRestriction::new(
            "badges",
            BitOp::And,
            FlagSet::of([Badge::Gold, Badge::Bronze]),
            ComparisonOp::Gt,
            0,
        );
        assert_eq!(
            restriction.to_sql(&query).unwrap(),
            "(this_.badges & 5 > 0)"
        );
        assert!(restriction.bind_values(&query).unwrap().is_empty());
    }

    #[test]
    fn raw_masks_render_unchanged() {
        let query = query();
        let restriction =
            FlagSetRestriction::from_mask("badges", BitOp::Or, 12, ComparisonOp::Eq, 12);
        assert_eq!(
            restriction.to_sql(&query).unwrap(),
            "(this_.badges | 12 = 12)"
        );
    }
}
