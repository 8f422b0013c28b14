//! Factory functions for building criteria.
//!
//! The text factories treat the empty string and SQL NULL as one logical
//! "empty" state: matching against `""` degrades to an emptiness check, and
//! negative text matches accept empty-valued rows instead of silently
//! dropping them. Plain value comparisons without that treatment are
//! available as `*_value` factories and through [`Operator`](crate::Operator).

use crate::{
    criterion::{
        Between, BitOp, Compare, ComparisonOp, Criterion, FlagSetRestriction, IsNull, Junction,
        Like, Not, ReverseIlike, SqlRestriction,
    },
    flags::{Flag, FlagSet},
    match_mode::{MatchMode, PropertyMatchMode},
    value::SqlValue,
};

/// Plain equality on any bound value.
pub fn eq_value(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Eq, value))
}

/// Plain inequality on any bound value.
pub fn ne_value(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Ne, value))
}

/// Strictly-greater-than comparison.
pub fn gt(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Gt, value))
}

/// Greater-than-or-equal comparison.
pub fn ge(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Ge, value))
}

/// Strictly-less-than comparison.
pub fn lt(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Lt, value))
}

/// Less-than-or-equal comparison.
pub fn le(property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
    Box::new(Compare::new(property, ComparisonOp::Le, value))
}

/// Inclusive range check binding both bounds.
pub fn between(
    property: &str,
    low: impl Into<SqlValue>,
    high: impl Into<SqlValue>,
) -> Box<dyn Criterion> {
    Box::new(Between::new(property, low, high))
}

/// Null check.
pub fn is_null(property: &str) -> Box<dyn Criterion> {
    Box::new(IsNull::new(property))
}

/// Not-null check.
pub fn is_not_null(property: &str) -> Box<dyn Criterion> {
    Box::new(IsNull::new(property).negated())
}

/// Case-sensitive LIKE with the pattern built by `match_mode`.
pub fn like(property: &str, value: &str, match_mode: MatchMode) -> Box<dyn Criterion> {
    Box::new(Like::new(property, value, match_mode))
}

/// Negates a criterion.
pub fn not(criterion: Box<dyn Criterion>) -> Box<dyn Criterion> {
    Box::new(Not::new(criterion))
}

/// Verbatim SQL fragment; `{alias}` is replaced with the root alias.
pub fn sql(fragment: &str) -> Box<dyn Criterion> {
    Box::new(SqlRestriction::new(fragment))
}

/// `and` over two or more criteria.
pub fn conjunction(
    first: Box<dyn Criterion>,
    second: Box<dyn Criterion>,
    rest: Vec<Box<dyn Criterion>>,
) -> Box<dyn Criterion> {
    Box::new(junction_of(Junction::conjunction(), first, second, rest))
}

/// `or` over two or more criteria.
pub fn disjunction(
    first: Box<dyn Criterion>,
    second: Box<dyn Criterion>,
    rest: Vec<Box<dyn Criterion>>,
) -> Box<dyn Criterion> {
    Box::new(junction_of(Junction::disjunction(), first, second, rest))
}

fn junction_of(
    junction: Junction,
    first: Box<dyn Criterion>,
    second: Box<dyn Criterion>,
    rest: Vec<Box<dyn Criterion>>,
) -> Junction {
    let mut junction = junction.add(first).add(second);
    for criterion in rest {
        junction = junction.add(criterion);
    }
    junction
}

/// Equality that treats the empty string as the empty state: matching
/// against `""` yields [`is_empty`] instead of a comparison.
pub fn eq(property: &str, value: &str) -> Box<dyn Criterion> {
    if value.is_empty() {
        is_empty(property)
    } else {
        eq_value(property, value)
    }
}

/// Inequality that treats the empty string as the empty state.
///
/// A non-empty `value` also matches rows whose property is NULL, since
/// those rows do hold something different from `value`.
pub fn ne(property: &str, value: &str) -> Box<dyn Criterion> {
    if value.is_empty() {
        is_not_empty(property)
    } else {
        Box::new(
            Junction::disjunction()
                .add(ne_value(property, value))
                .add(is_null(property)),
        )
    }
}

/// Matches properties holding the empty state: `''` or SQL NULL.
pub fn is_empty(property: &str) -> Box<dyn Criterion> {
    Box::new(
        Junction::disjunction()
            .add(eq_value(property, ""))
            .add(is_null(property)),
    )
}

/// Matches properties holding any non-empty value.
pub fn is_not_empty(property: &str) -> Box<dyn Criterion> {
    not(is_empty(property))
}

/// Case-insensitive LIKE, empty-aware: an empty `value` degrades to
/// [`is_empty`].
pub fn ilike(property: &str, value: &str, match_mode: MatchMode) -> Box<dyn Criterion> {
    if value.is_empty() {
        is_empty(property)
    } else {
        Box::new(Like::new(property, value, match_mode).ignore_case())
    }
}

/// Negated case-insensitive LIKE that also matches empty-valued rows.
pub fn not_ilike(property: &str, value: &str, match_mode: MatchMode) -> Box<dyn Criterion> {
    if value.is_empty() {
        is_not_empty(property)
    } else {
        Box::new(
            Junction::disjunction()
                .add(not(Box::new(
                    Like::new(property, value, match_mode).ignore_case(),
                )))
                .add(is_empty(property)),
        )
    }
}

/// Reversed case-insensitive LIKE: the column supplies the pattern, the
/// bound value is the matched text.
pub fn reverse_ilike(
    property: &str,
    value: &str,
    match_mode: PropertyMatchMode,
) -> Box<dyn Criterion> {
    Box::new(ReverseIlike::new(property, value, match_mode))
}

/// Negated reversed LIKE that also matches empty-valued rows.
pub fn not_reverse_ilike(
    property: &str,
    value: &str,
    match_mode: PropertyMatchMode,
) -> Box<dyn Criterion> {
    Box::new(
        Junction::disjunction()
            .add(not(reverse_ilike(property, value, match_mode)))
            .add(is_empty(property)),
    )
}

/// Matches rows whose flag column contains `flag`.
pub fn has<E: Flag>(property: &str, flag: E) -> Box<dyn Criterion> {
    all(property, FlagSet::of([flag]))
}

/// Matches rows whose flag column intersects `flags`.
///
/// The rendered test is `(col & mask > 0)`, so any shared flag matches.
pub fn all<E: Flag>(property: &str, flags: FlagSet<E>) -> Box<dyn Criterion> {
    Box::new(FlagSetRestriction::new(
        property,
        BitOp::And,
        flags,
        ComparisonOp::Gt,
        0,
    ))
}

/// Matches rows whose flag column does not contain `flag`.
pub fn not_has<E: Flag>(property: &str, flag: E) -> Box<dyn Criterion> {
    none(property, FlagSet::of([flag]))
}

/// Matches rows whose flag column shares no flag with `flags`.
pub fn none<E: Flag>(property: &str, flags: FlagSet<E>) -> Box<dyn Criterion> {
    Box::new(FlagSetRestriction::new(
        property,
        BitOp::And,
        flags,
        ComparisonOp::Eq,
        0,
    ))
}

/// Bit test on an alias-qualified raw column: `({alias}.column & mask) > 0`.
///
/// A MySQL-flavoured escape hatch for columns the query cannot resolve as
/// properties; prefer [`has`] where a property mapping exists.
pub fn bit_contains(column: &str, mask: i64) -> Box<dyn Criterion> {
    bit_and_gt(column, mask, 0)
}

/// Bit test on an alias-qualified raw column: `({alias}.column & mask) > value`.
pub fn bit_and_gt(column: &str, mask: i64, value: i64) -> Box<dyn Criterion> {
    sql(&format!("({{alias}}.{column} & {mask}) > {value}"))
}
