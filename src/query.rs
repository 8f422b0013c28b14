//! The query seam criteria render against, plus a map-backed implementation.

use std::collections::HashMap;

use crate::{
    dialect::{Ansi, Dialect},
    error::{CriteriaError, Result},
};

/// Collection metadata used by size restrictions: the collection table and
/// the key pair joining it to its owner row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionRef {
    /// Table holding the collection rows.
    pub table: String,
    /// Column of `table` referencing the owner.
    pub key_column: String,
    /// Owner column referenced by `key_column`, relative to the root alias.
    pub owner_id_column: String,
}

impl CollectionRef {
    /// Creates collection metadata.
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        key_column: impl Into<String>,
        owner_id_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            key_column: key_column.into(),
            owner_id_column: owner_id_column.into(),
        }
    }
}

/// Resolution services a [`Criterion`](crate::Criterion) needs while
/// rendering: property-to-column lookup, the SQL dialect, and the root
/// table alias.
///
/// Query engines driving the criteria implement this; [`TableQuery`] is a
/// standalone implementation for hosts without one.
pub trait CriteriaQuery {
    /// SQL dialect fragments are rendered for.
    fn dialect(&self) -> &dyn Dialect;

    /// Alias of the root table.
    fn root_alias(&self) -> &str;

    /// Resolves a property to its alias-qualified column names.
    fn columns(&self, property: &str) -> Result<Vec<String>>;

    /// Resolves a collection property to its metadata.
    fn collection(&self, property: &str) -> Result<CollectionRef> {
        Err(CriteriaError::UnknownCollection(property.to_owned()))
    }
}

/// Resolves `property` to exactly one column.
pub(crate) fn single_column(
    query: &dyn CriteriaQuery,
    property: &str,
    operation: &'static str,
) -> Result<String> {
    let mut columns = query.columns(property)?;
    if columns.len() != 1 {
        return Err(CriteriaError::SingleColumnRequired {
            operation,
            property: property.to_owned(),
            columns: columns.len(),
        });
    }
    Ok(columns.remove(0))
}

/// Map-backed [`CriteriaQuery`] over a single root table.
///
/// Columns are stored unqualified and come back qualified with the root
/// alias, the way a host engine would hand them to its criteria.
#[derive(Debug)]
pub struct TableQuery {
    dialect: Box<dyn Dialect>,
    alias: String,
    properties: HashMap<String, Vec<String>>,
    collections: HashMap<String, CollectionRef>,
}

impl TableQuery {
    /// Starts building a query whose root table is aliased as `alias`.
    #[must_use]
    pub fn builder(alias: impl Into<String>) -> TableQueryBuilder {
        TableQueryBuilder {
            dialect: Box::new(Ansi),
            alias: alias.into(),
            properties: HashMap::new(),
            collections: HashMap::new(),
        }
    }
}

impl CriteriaQuery for TableQuery {
    fn dialect(&self) -> &dyn Dialect {
        &*self.dialect
    }

    fn root_alias(&self) -> &str {
        &self.alias
    }

    fn columns(&self, property: &str) -> Result<Vec<String>> {
        self.properties
            .get(property)
            .map(|columns| {
                columns
                    .iter()
                    .map(|column| format!("{}.{column}", self.alias))
                    .collect()
            })
            .ok_or_else(|| CriteriaError::UnknownProperty(property.to_owned()))
    }

    fn collection(&self, property: &str) -> Result<CollectionRef> {
        self.collections
            .get(property)
            .cloned()
            .ok_or_else(|| CriteriaError::UnknownCollection(property.to_owned()))
    }
}

/// Builder for [`TableQuery`].
#[derive(Debug)]
pub struct TableQueryBuilder {
    dialect: Box<dyn Dialect>,
    alias: String,
    properties: HashMap<String, Vec<String>>,
    collections: HashMap<String, CollectionRef>,
}

impl TableQueryBuilder {
    /// Sets the SQL dialect. Defaults to [`Ansi`].
    #[must_use]
    pub fn dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.dialect = Box::new(dialect);
        self
    }

    /// Maps a property to one column.
    #[must_use]
    pub fn property(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.properties
            .insert(property.into(), vec![column.into()]);
        self
    }

    /// Maps a property to several columns, as composite values resolve.
    #[must_use]
    pub fn composite_property<I, S>(mut self, property: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.insert(
            property.into(),
            columns.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Registers collection metadata for a collection property.
    #[must_use]
    pub fn collection(mut self, property: impl Into<String>, collection: CollectionRef) -> Self {
        self.collections.insert(property.into(), collection);
        self
    }

    /// Finishes the query.
    #[must_use]
    pub fn build(self) -> TableQuery {
        TableQuery {
            dialect: self.dialect,
            alias: self.alias,
            properties: self.properties,
            collections: self.collections,
        }
    }
}
