//! Match modes controlling where LIKE patterns may match.

use crate::dialect::Dialect;

/// Where a bound value may match inside the column text.
///
/// Used by forward LIKE criteria, which build the pattern *string* bound to
/// the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The value must match the whole text.
    Exact,
    /// The value must match the start of the text.
    Start,
    /// The value must match the end of the text.
    End,
    /// The value may match anywhere inside the text.
    #[default]
    Anywhere,
}

impl MatchMode {
    /// Wraps `value` in `%` wildcards according to the mode.
    #[must_use]
    pub fn pattern(self, value: &str) -> String {
        match self {
            MatchMode::Exact => value.to_owned(),
            MatchMode::Start => format!("{value}%"),
            MatchMode::End => format!("%{value}"),
            MatchMode::Anywhere => format!("%{value}%"),
        }
    }
}

/// Where the column text may match inside a bound value.
///
/// Used by reversed LIKE criteria, where the *column* builds the pattern,
/// so the wildcards are concatenated around the column expression in SQL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyMatchMode {
    /// The column must match the whole value.
    Exact,
    /// The column must match the start of the value.
    Start,
    /// The column must match the end of the value.
    End,
    /// The column may match anywhere inside the value.
    #[default]
    Anywhere,
}

impl PropertyMatchMode {
    /// Renders the pattern expression built around `column`.
    #[must_use]
    pub fn pattern_sql(self, dialect: &dyn Dialect, column: &str) -> String {
        match self {
            PropertyMatchMode::Exact => column.to_owned(),
            PropertyMatchMode::Start => dialect.concat(&[column, "'%'"]),
            PropertyMatchMode::End => dialect.concat(&["'%'", column]),
            PropertyMatchMode::Anywhere => dialect.concat(&["'%'", column, "'%'"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Ansi, MySql};

    #[test]
    fn match_mode_wraps_the_value() {
        assert_eq!(MatchMode::Exact.pattern("abc"), "abc");
        assert_eq!(MatchMode::Start.pattern("abc"), "abc%");
        assert_eq!(MatchMode::End.pattern("abc"), "%abc");
        assert_eq!(MatchMode::Anywhere.pattern("abc"), "%abc%");
    }

    #[test]
    fn property_match_mode_wraps_the_column() {
        assert_eq!(PropertyMatchMode::Exact.pattern_sql(&Ansi, "t.name"), "t.name");
        assert_eq!(
            PropertyMatchMode::Start.pattern_sql(&Ansi, "t.name"),
            "(t.name || '%')"
        );
        assert_eq!(
            PropertyMatchMode::Anywhere.pattern_sql(&MySql, "t.name"),
            "concat('%', t.name, '%')"
        );
    }
}
