//! SQL dialect hooks used while rendering fragments.

use std::fmt;

/// The dialect-sensitive pieces of SQL the criteria need.
///
/// Little varies across the supported databases: whether `ilike` exists
/// natively, plus the spelling of case folding and string concatenation.
/// Everything else the crate renders is plain ANSI SQL.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Dialect name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Name of the function that lower-cases a string expression.
    fn lowercase_function(&self) -> &'static str {
        "lower"
    }

    /// Whether the dialect supports the `ilike` operator natively.
    fn supports_ilike(&self) -> bool {
        false
    }

    /// Renders the concatenation of the given SQL expressions.
    fn concat(&self, parts: &[&str]) -> String {
        let mut sql = String::from("(");
        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                sql.push_str(" || ");
            }
            sql.push_str(part);
        }
        sql.push(')');
        sql
    }
}

/// Plain ANSI SQL: `lower()` case folding and `||` concatenation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Dialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }
}

/// PostgreSQL: native `ilike`, ANSI concatenation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn supports_ilike(&self) -> bool {
        true
    }
}

/// MySQL: no native `ilike`, function-style `concat(..)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn concat(&self, parts: &[&str]) -> String {
        format!("concat({})", parts.join(", "))
    }
}
