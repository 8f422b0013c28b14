//! Case-insensitive LIKE with the pattern and value roles reversed.

use tracing::debug;

use super::Criterion;
use crate::{
    error::Result,
    match_mode::PropertyMatchMode,
    query::{single_column, CriteriaQuery},
    value::SqlValue,
};

/// Case-insensitive LIKE where the *column* supplies the pattern and the
/// bound value is the text matched against it.
///
/// On dialects with native `ilike` this renders `? ilike <pattern>`; on the
/// rest it renders `? like <lower>(<pattern>)`, with `<pattern>` built
/// around the column by the criterion's [`PropertyMatchMode`]. The single
/// bound value is the input text lower-cased, so both sides fold case the
/// same way. The property must resolve to exactly one column.
#[derive(Debug)]
pub struct ReverseIlike {
    property: String,
    value: String,
    match_mode: PropertyMatchMode,
}

impl ReverseIlike {
    /// Creates the criterion.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        value: impl Into<String>,
        match_mode: PropertyMatchMode,
    ) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            match_mode,
        }
    }
}

impl Criterion for ReverseIlike {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let column = single_column(query, &self.property, "reverse ilike")?;
        let dialect = query.dialect();
        let pattern = self.match_mode.pattern_sql(dialect, &column);
        let sql = if dialect.supports_ilike() {
            format!("? ilike {pattern}")
        } else {
            format!("? like {}({pattern})", dialect.lowercase_function())
        };
        debug!(property = %self.property, dialect = dialect.name(), sql = %sql, "rendered reverse ilike");
        Ok(sql)
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        Ok(vec![SqlValue::Text(self.value.to_lowercase())])
    }
}
