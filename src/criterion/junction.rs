//! Logical combinators over other criteria.

use super::Criterion;
use crate::{error::Result, query::CriteriaQuery, value::SqlValue};

#[derive(Clone, Copy, Debug)]
enum JunctionKind {
    And,
    Or,
}

/// Conjunction or disjunction over member criteria.
///
/// Members render inside one pair of parentheses joined by the junction's
/// connective. An empty junction renders its neutral literal: `1=1` for a
/// conjunction, `1=0` for a disjunction.
#[derive(Debug)]
pub struct Junction {
    kind: JunctionKind,
    members: Vec<Box<dyn Criterion>>,
}

impl Junction {
    /// Creates an empty `and` junction.
    #[must_use]
    pub fn conjunction() -> Self {
        Self {
            kind: JunctionKind::And,
            members: Vec::new(),
        }
    }

    /// Creates an empty `or` junction.
    #[must_use]
    pub fn disjunction() -> Self {
        Self {
            kind: JunctionKind::Or,
            members: Vec::new(),
        }
    }

    /// Adds a member criterion.
    #[must_use]
    pub fn add(mut self, criterion: Box<dyn Criterion>) -> Self {
        self.members.push(criterion);
        self
    }

    /// Returns the number of member criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the junction has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn connective(&self) -> &'static str {
        match self.kind {
            JunctionKind::And => " and ",
            JunctionKind::Or => " or ",
        }
    }

    fn neutral(&self) -> &'static str {
        match self.kind {
            JunctionKind::And => "1=1",
            JunctionKind::Or => "1=0",
        }
    }
}

impl Criterion for Junction {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        if self.members.is_empty() {
            return Ok(self.neutral().to_owned());
        }
        let fragments = self
            .members
            .iter()
            .map(|member| member.to_sql(query))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", fragments.join(self.connective())))
    }

    fn bind_values(&self, query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        let mut values = Vec::new();
        for member in &self.members {
            values.extend(member.bind_values(query)?);
        }
        Ok(values)
    }
}

/// Negation of another criterion, rendered as `not (...)`.
#[derive(Debug)]
pub struct Not {
    inner: Box<dyn Criterion>,
}

impl Not {
    /// Wraps `inner` in a negation.
    #[must_use]
    pub fn new(inner: Box<dyn Criterion>) -> Self {
        Self { inner }
    }
}

impl Criterion for Not {
    fn to_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        Ok(format!("not ({})", self.inner.to_sql(query)?))
    }

    fn bind_values(&self, query: &dyn CriteriaQuery) -> Result<Vec<SqlValue>> {
        self.inner.bind_values(query)
    }
}
