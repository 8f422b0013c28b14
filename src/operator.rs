//! Comparison operator façade for building restrictions.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    criterion::{Compare, ComparisonOp, Criterion, SizeRestriction},
    error::{CriteriaError, Result},
    flags::{ordinal, Flag},
    restrictions,
    value::SqlValue,
};

/// A requested comparison, bundling the restriction builders that depend
/// on what is being compared.
///
/// Plain values compare directly; dates compare at day granularity; flags
/// only support the equality operators; collection sizes compare through a
/// correlated count subquery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Equal.
    Eq,
    /// Less than or equal.
    Le,
    /// Strictly less than.
    Lt,
    /// Not equal.
    Ne,
}

impl Operator {
    /// Returns the SQL comparison operator.
    #[must_use]
    pub fn comparison(self) -> ComparisonOp {
        match self {
            Operator::Gt => ComparisonOp::Gt,
            Operator::Ge => ComparisonOp::Ge,
            Operator::Eq => ComparisonOp::Eq,
            Operator::Le => ComparisonOp::Le,
            Operator::Lt => ComparisonOp::Lt,
            Operator::Ne => ComparisonOp::Ne,
        }
    }

    /// Plain comparison against a bound value.
    #[must_use]
    pub fn restrict(self, property: &str, value: impl Into<SqlValue>) -> Box<dyn Criterion> {
        Box::new(Compare::new(property, self.comparison(), value))
    }

    /// Day-granularity comparison against a calendar date.
    ///
    /// The date expands to its day bounds (00:00:00.000 to 23:59:59.999):
    /// `Gt` means after the day ends, `Ge` from the day's start, `Eq`
    /// anywhere within the day, `Le` until the day ends, `Lt` before it
    /// starts, and `Ne` anywhere outside it.
    #[must_use]
    pub fn restrict_date(self, property: &str, date: NaiveDate) -> Box<dyn Criterion> {
        let begin = begin_of_day(date);
        let end = end_of_day(date);
        match self {
            Operator::Gt => restrictions::gt(property, end),
            Operator::Ge => restrictions::ge(property, begin),
            Operator::Eq => restrictions::between(property, begin, end),
            Operator::Le => restrictions::le(property, end),
            Operator::Lt => restrictions::lt(property, begin),
            Operator::Ne => restrictions::not(restrictions::between(property, begin, end)),
        }
    }

    /// Day-granularity comparison against the day a timestamp falls on.
    #[must_use]
    pub fn restrict_datetime(self, property: &str, at: NaiveDateTime) -> Box<dyn Criterion> {
        self.restrict_date(property, at.date())
    }

    /// Comparison against a single flag, bound as its ordinal.
    ///
    /// Only the equality operators apply: `Eq` compares directly and `Ne`
    /// also accepts rows whose property is NULL. Every other operator is
    /// rejected as unsupported.
    pub fn restrict_flag<E: Flag>(self, property: &str, flag: E) -> Result<Box<dyn Criterion>> {
        let value = ordinal(flag) as i64;
        match self {
            Operator::Eq => Ok(restrictions::eq_value(property, value)),
            Operator::Ne => Ok(restrictions::disjunction(
                restrictions::ne_value(property, value),
                restrictions::is_null(property),
                Vec::new(),
            )),
            other => Err(CriteriaError::UnsupportedOperator {
                operator: other.comparison().symbol(),
                subject: "flag",
            }),
        }
    }

    /// Comparison of an owned collection's row count against `size`.
    #[must_use]
    pub fn restrict_collection_size(self, property: &str, size: i64) -> Box<dyn Criterion> {
        Box::new(SizeRestriction::new(property, self.comparison(), size))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.comparison())
    }
}

fn begin_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time of day")
}

#[cfg(test)]
mod tests {
    use strum_macros::VariantArray;

    use super::*;
    use crate::query::TableQuery;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, VariantArray)]
    enum Status {
        Draft,
        Published,
        Archived,
    }

    fn query() -> TableQuery {
        TableQuery::builder("this_")
            .property("created_at", "created_at")
            .property("status", "status")
            .build()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn date_equality_spans_the_whole_day() {
        let query = query();
        let criterion = Operator::Eq.restrict_date("created_at", day());
        assert_eq!(
            criterion.to_sql(&query).unwrap(),
            "this_.created_at between ? and ?"
        );
        assert_eq!(
            criterion.bind_values(&query).unwrap(),
            vec![
                SqlValue::Timestamp(day().and_hms_opt(0, 0, 0).unwrap()),
                SqlValue::Timestamp(day().and_hms_milli_opt(23, 59, 59, 999).unwrap()),
            ]
        );
    }

    #[test]
    fn date_bounds_pick_the_correct_edge() {
        let query = query();
        let gt = Operator::Gt.restrict_date("created_at", day());
        assert_eq!(gt.to_sql(&query).unwrap(), "this_.created_at > ?");
        assert_eq!(
            gt.bind_values(&query).unwrap(),
            vec![SqlValue::Timestamp(
                day().and_hms_milli_opt(23, 59, 59, 999).unwrap()
            )]
        );

        let lt = Operator::Lt.restrict_date("created_at", day());
        assert_eq!(
            lt.bind_values(&query).unwrap(),
            vec![SqlValue::Timestamp(day().and_hms_opt(0, 0, 0).unwrap())]
        );
    }

    #[test]
    fn date_inequality_negates_the_day_span() {
        let criterion = Operator::Ne.restrict_date("created_at", day());
        assert_eq!(
            criterion.to_sql(&query()).unwrap(),
            "not (this_.created_at between ? and ?)"
        );
    }

    #[test]
    fn datetime_restrictions_truncate_to_the_day() {
        let at = day().and_hms_opt(14, 30, 5).unwrap();
        let from_datetime = Operator::Eq.restrict_datetime("created_at", at);
        let from_date = Operator::Eq.restrict_date("created_at", day());
        let query = query();
        assert_eq!(
            from_datetime.bind_values(&query).unwrap(),
            from_date.bind_values(&query).unwrap()
        );
    }

    #[test]
    fn flag_restrictions_support_only_equality() {
        let query = query();
        let eq = Operator::Eq.restrict_flag("status", Status::Published).unwrap();
        assert_eq!(eq.to_sql(&query).unwrap(), "this_.status = ?");
        assert_eq!(eq.bind_values(&query).unwrap(), vec![SqlValue::Int64(1)]);

        let ne = Operator::Ne.restrict_flag("status", Status::Archived).unwrap();
        assert_eq!(
            ne.to_sql(&query).unwrap(),
            "(this_.status <> ? or this_.status is null)"
        );

        assert_eq!(
            Operator::Ge.restrict_flag("status", Status::Draft).unwrap_err(),
            CriteriaError::UnsupportedOperator {
                operator: ">=",
                subject: "flag",
            }
        );
    }

    #[test]
    fn plain_restrictions_use_the_sql_operator() {
        let criterion = Operator::Le.restrict("status", 4);
        assert_eq!(criterion.to_sql(&query()).unwrap(), "this_.status <= ?");
        assert_eq!(Operator::Le.to_string(), "<=");
        assert_eq!(Operator::Ne.to_string(), "<>");
    }
}
