//! Collection size restrictions.

use super::{ComparisonOp, Criterion};
use crate::{error::Result, query::CriteriaQuery, value::SqlValue};

/// Compares the number of rows in an owned collection against a bound size.
///
/// Renders `? <flipped op> (select count(*) from <table> where
/// <table>.<key> = <alias>.<owner id>)`. The bound size sits left of the
/// operator, so the requested comparison is flipped: asking for
/// `count > 2` renders `? < (select ...)` with `2` bound.
#[derive(Debug)]
pub struct SizeRestriction {
    property: String,
    op: ComparisonOp,
    size: i64,
}

impl SizeRestriction {
    /// Creates a restriction asserting `count(property) <op> size`.
    #[must_use]
    pub fn new(property: impl Into<String>, op: ComparisonOp, size: i64) -> Self {
        Self {
            property: property.into(),
            op,
            size,
        }
    }
}

impl Criterion for SizeRestriction {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let collection = query.collection(&self.property)?;
        Ok(format!(
            "? {} (select count(*) from {table} where {table}.{key} = {alias}.{owner})",
            self.op.flipped(),
            table = collection.table,
            key = collection.key_column,
            alias = query.root_alias(),
            owner = collection.owner_id_column,
        ))
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        Ok(vec![SqlValue::Int64(self.size)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::CriteriaError,
        query::{CollectionRef, TableQuery},
    };

    fn query() -> TableQuery {
        TableQuery::builder("this_")
            .collection("roles", CollectionRef::new("user_roles", "user_id", "id"))
            .build()
    }

    #[test]
    fn the_requested_comparison_is_flipped_around_the_subquery() {
        let query = query();
        let restriction = SizeRestriction::new("roles", ComparisonOp::Gt, 2);
        assert_eq!(
            restriction.to_sql(&query).unwrap(),
            "? < (select count(*) from user_roles where user_roles.user_id = this_.id)"
        );
        assert_eq!(
            restriction.bind_values(&query).unwrap(),
            vec![SqlValue::Int64(2)]
        );
    }

    #[test]
    fn equality_is_left_unchanged_by_the_flip() {
        let restriction = SizeRestriction::new("roles", ComparisonOp::Eq, 0);
        assert_eq!(
            restriction.to_sql(&query()).unwrap(),
            "? = (select count(*) from user_roles where user_roles.user_id = this_.id)"
        );
    }

    #[test]
    fn unknown_collections_are_reported() {
        let restriction = SizeRestriction::new("tags", ComparisonOp::Ge, 1);
        assert_eq!(
            restriction.to_sql(&query()),
            Err(CriteriaError::UnknownCollection("tags".to_owned()))
        );
    }
}
