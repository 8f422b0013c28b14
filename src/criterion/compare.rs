//! Leaf criteria: comparisons, ranges, null checks, and LIKE matching.

use super::{ComparisonOp, Criterion};
use crate::{
    error::Result,
    match_mode::MatchMode,
    query::{single_column, CriteriaQuery},
    value::SqlValue,
};

/// Binary comparison between a property and a bound value.
///
/// Multi-column properties render one comparison per column joined with
/// `" and "` inside parentheses, binding the value once per column.
#[derive(Debug)]
pub struct Compare {
    property: String,
    op: ComparisonOp,
    value: SqlValue,
}

impl Compare {
    /// Creates a comparison criterion.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        op: ComparisonOp,
        value: impl Into<SqlValue>,
    ) -> Self {
        Self {
            property: property.into(),
            op,
            value: value.into(),
        }
    }
}

impl Criterion for Compare {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let columns = query.columns(&self.property)?;
        let fragments: Vec<String> = columns
            .iter()
            .map(|column| format!("{column} {} ?", self.op))
            .collect();
        Ok(join_fragments(fragments, " and "))
    }

    fn bind_values(&self, query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        let columns = query.columns(&self.property)?;
        Ok(vec![self.value.clone(); columns.len()])
    }
}

/// Inclusive range check binding both bounds.
#[derive(Debug)]
pub struct Between {
    property: String,
    low: SqlValue,
    high: SqlValue,
}

impl Between {
    /// Creates a range criterion over `low..=high`.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        low: impl Into<SqlValue>,
        high: impl Into<SqlValue>,
    ) -> Self {
        Self {
            property: property.into(),
            low: low.into(),
            high: high.into(),
        }
    }
}

impl Criterion for Between {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let columns = query.columns(&self.property)?;
        let fragments: Vec<String> = columns
            .iter()
            .map(|column| format!("{column} between ? and ?"))
            .collect();
        Ok(join_fragments(fragments, " and "))
    }

    fn bind_values(&self, query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        let columns = query.columns(&self.property)?;
        let mut values = Vec::with_capacity(columns.len() * 2);
        for _ in &columns {
            values.push(self.low.clone());
            values.push(self.high.clone());
        }
        Ok(values)
    }
}

/// Null check over a property.
///
/// The plain form requires every column of the property to be null; the
/// negated form matches when any column is not null.
#[derive(Debug)]
pub struct IsNull {
    property: String,
    negated: bool,
}

impl IsNull {
    /// Creates an `is null` criterion.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            negated: false,
        }
    }

    /// Turns the criterion into `is not null`.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}

impl Criterion for IsNull {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let columns = query.columns(&self.property)?;
        let (suffix, connective) = if self.negated {
            (" is not null", " or ")
        } else {
            (" is null", " and ")
        };
        let fragments: Vec<String> = columns
            .iter()
            .map(|column| format!("{column}{suffix}"))
            .collect();
        Ok(join_fragments(fragments, connective))
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        Ok(Vec::new())
    }
}

/// LIKE matching over a bound pattern, optionally case-insensitive.
///
/// The pattern is built from the value by the criterion's [`MatchMode`] and
/// always bound, never inlined. Case-insensitive matching renders the
/// dialect's native `ilike` when available and wraps the column in the
/// dialect's lowercase function otherwise, binding the pattern lower-cased
/// either way.
#[derive(Debug)]
pub struct Like {
    property: String,
    value: String,
    match_mode: MatchMode,
    ignore_case: bool,
}

impl Like {
    /// Creates a case-sensitive LIKE criterion.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        value: impl Into<String>,
        match_mode: MatchMode,
    ) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            match_mode,
            ignore_case: false,
        }
    }

    /// Makes the match case-insensitive.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    fn operation(&self) -> &'static str {
        if self.ignore_case {
            "ilike"
        } else {
            "like"
        }
    }
}

impl Criterion for Like {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let column = single_column(query, &self.property, self.operation())?;
        let dialect = query.dialect();
        Ok(if !self.ignore_case {
            format!("{column} like ?")
        } else if dialect.supports_ilike() {
            format!("{column} ilike ?")
        } else {
            format!("{}({column}) like ?", dialect.lowercase_function())
        })
    }

    fn bind_values(&self, _query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        let pattern = self.match_mode.pattern(&self.value);
        Ok(vec![SqlValue::Text(if self.ignore_case {
            pattern.to_lowercase()
        } else {
            pattern
        })])
    }
}

fn join_fragments(fragments: Vec<String>, connective: &str) -> String {
    if fragments.len() == 1 {
        fragments.into_iter().next().unwrap_or_default()
    } else {
        format!("({})", fragments.join(connective))
    }
}
