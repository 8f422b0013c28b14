//! Verbatim SQL restrictions.

use super::Criterion;
use crate::{error::Result, query::CriteriaQuery, value::SqlValue};

/// Verbatim SQL fragment with `{alias}` placeholders.
///
/// Every occurrence of `{alias}` is replaced with the query's root alias at
/// render time. The fragment binds no values, so any `?` it carries is the
/// caller's responsibility.
#[derive(Debug)]
pub struct SqlRestriction {
    sql: String,
}

impl SqlRestriction {
    /// Creates the restriction from a raw fragment.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }
}

impl Criterion for SqlRestriction {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        Ok(self.sql.replace("{alias}", query.root_alias()))
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        Ok(Vec::new())
    }
}
