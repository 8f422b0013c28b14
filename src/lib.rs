#![deny(missing_docs)]
//! Criteria-style SQL predicate extensions.
//!
//! This crate supplies the pieces a criteria-style query layer does not
//! ship out of the box: empty-string-aware text predicates, a reversed
//! case-insensitive LIKE where the column provides the pattern, bitmask
//! flag-set columns with bitwise criteria, day-granularity date
//! restrictions, group-only projections, and a forward-only iterator over
//! scrollable result cursors.
//!
//! Criteria render SQL fragments with `?` placeholders plus the typed
//! values bound to them; nothing here executes SQL or talks to a driver.
//! The host engine implements [`CriteriaQuery`] (or uses [`TableQuery`])
//! and consumes the fragments through its own query pipeline.
//!
//! ```
//! use sql_criteria::{restrictions, Criterion, MatchMode, SqlValue, TableQuery};
//!
//! let query = TableQuery::builder("this_")
//!     .property("name", "name")
//!     .build();
//!
//! let criterion = restrictions::ilike("name", "Ada", MatchMode::Anywhere);
//! assert_eq!(criterion.to_sql(&query)?, "lower(this_.name) like ?");
//! assert_eq!(
//!     criterion.bind_values(&query)?,
//!     vec![SqlValue::Text("%ada%".to_owned())]
//! );
//! # Ok::<(), sql_criteria::CriteriaError>(())
//! ```

mod codec;
mod criterion;
mod cursor;
mod dialect;
mod error;
pub mod flags;
mod match_mode;
mod operator;
pub mod projection;
mod query;
pub mod restrictions;
mod value;

pub use codec::{ColumnCodec, FlagSetCodec};
pub use criterion::{
    Between, BitOp, Compare, ComparisonOp, Criterion, FlagSetRestriction, IsNull, Junction, Like,
    Not, ReverseIlike, SizeRestriction, SqlRestriction,
};
pub use cursor::{CursorIter, ScrollCursor, VecCursor};
pub use dialect::{Ansi, Dialect, MySql, Postgres};
pub use error::{CriteriaError, Result};
pub use flags::{Flag, FlagSet, Flags};
pub use match_mode::{MatchMode, PropertyMatchMode};
pub use operator::Operator;
pub use projection::{GroupProjection, Projection, ProjectionList, PropertyProjection};
pub use query::{CollectionRef, CriteriaQuery, TableQuery, TableQueryBuilder};
pub use value::{SqlType, SqlValue};
