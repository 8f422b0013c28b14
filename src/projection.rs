//! Projections for select and group-by lists.
//!
//! A [`ProjectionList`] renders the two clauses of a grouped query from the
//! same members. Group-only members contribute a column to `group by`
//! without widening the select list, which keeps grouping columns out of
//! the result row instead of duplicating them there.

use std::fmt;

use crate::{
    error::Result,
    query::{single_column, CriteriaQuery},
};

/// One element of a select/group-by projection.
pub trait Projection: fmt::Debug + Send + Sync {
    /// Renders the select-list fragment, empty when the projection
    /// contributes no result column.
    fn select_sql(&self, position: usize, query: &dyn CriteriaQuery) -> Result<String>;

    /// Renders the group-by fragment, empty when ungrouped.
    fn group_by_sql(&self, query: &dyn CriteriaQuery) -> Result<String>;

    /// Whether the projection contributes to `group by`.
    fn is_grouped(&self) -> bool {
        false
    }

    /// Result-column aliases the projection introduces at `position`.
    fn aliases(&self, position: usize) -> Vec<String>;
}

/// Projects a property as a result column, optionally grouped.
#[derive(Debug)]
pub struct PropertyProjection {
    property: String,
    grouped: bool,
}

impl PropertyProjection {
    /// Projects `property` without grouping.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            grouped: false,
        }
    }

    /// Also adds the property to `group by`.
    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.grouped = true;
        self
    }
}

impl Projection for PropertyProjection {
    fn select_sql(&self, position: usize, query: &dyn CriteriaQuery) -> Result<String> {
        let column = single_column(query, &self.property, "projection")?;
        Ok(format!("{column} as y{position}_"))
    }

    fn group_by_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        if !self.grouped {
            return Ok(String::new());
        }
        single_column(query, &self.property, "projection")
    }

    fn is_grouped(&self) -> bool {
        self.grouped
    }

    fn aliases(&self, position: usize) -> Vec<String> {
        vec![format!("y{position}_")]
    }
}

/// Adds a column to `group by` without widening the select list.
#[derive(Debug)]
pub struct GroupProjection {
    property: String,
}

impl GroupProjection {
    /// Groups by `property` only.
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

impl Projection for GroupProjection {
    fn select_sql(&self, _position: usize, _query: &dyn CriteriaQuery) -> Result<String> {
        Ok(String::new())
    }

    fn group_by_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        single_column(query, &self.property, "group projection")
    }

    fn is_grouped(&self) -> bool {
        true
    }

    fn aliases(&self, _position: usize) -> Vec<String> {
        Vec::new()
    }
}

/// Ordered list of projections rendered into select and group-by lists.
///
/// Members contributing an empty fragment are skipped, so group-only
/// projections never leave stray commas behind. Positions advance by each
/// member's alias count.
#[derive(Debug, Default)]
pub struct ProjectionList {
    members: Vec<Box<dyn Projection>>,
}

impl ProjectionList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a projection.
    #[must_use]
    pub fn add(mut self, projection: Box<dyn Projection>) -> Self {
        self.members.push(projection);
        self
    }

    /// Returns the number of member projections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the list has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Renders the select list.
    pub fn select_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let mut position = 0;
        let mut fragments = Vec::new();
        for member in &self.members {
            let sql = member.select_sql(position, query)?;
            if !sql.is_empty() {
                fragments.push(sql);
            }
            position += member.aliases(position).len();
        }
        Ok(fragments.join(", "))
    }

    /// Renders the group-by list.
    pub fn group_by_sql(&self, query: &dyn CriteriaQuery) -> Result<String> {
        let mut fragments = Vec::new();
        for member in &self.members {
            let sql = member.group_by_sql(query)?;
            if !sql.is_empty() {
                fragments.push(sql);
            }
        }
        Ok(fragments.join(", "))
    }

    /// Whether any member projection is grouped.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.members.iter().any(|member| member.is_grouped())
    }
}

/// Projects a property as a result column.
pub fn property(name: &str) -> Box<dyn Projection> {
    Box::new(PropertyProjection::new(name))
}

/// Projects a property and groups by it.
pub fn group_property(name: &str) -> Box<dyn Projection> {
    Box::new(PropertyProjection::new(name).grouped())
}

/// Groups by a property without projecting it.
pub fn group_only(name: &str) -> Box<dyn Projection> {
    Box::new(GroupProjection::new(name))
}
