//! Typed SQL literal fragments and value-tuples
//!
//! All quoting and escaping of text goes through [`SqlLiteral::Text`], so a
//! rendered [`ValueTuple`] never contains an unescaped single quote.

use crate::app::models::ServiceRecord;
use std::fmt;

/// One literal in a VALUES tuple
#[derive(Debug, Clone, PartialEq)]
pub enum SqlLiteral {
    /// Single-quoted text with embedded quotes doubled
    Text(String),
    Decimal(f64),
    Integer(i64),
    Null,
}

impl SqlLiteral {
    /// Quoted text, or `NULL` when there is no value
    pub fn nullable_text(value: Option<&str>) -> Self {
        match value {
            Some(text) => SqlLiteral::Text(text.to_string()),
            None => SqlLiteral::Null,
        }
    }
}

impl fmt::Display for SqlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlLiteral::Text(text) => write!(f, "'{}'", escape_sql_string(text)),
            // Debug keeps a fractional part on whole numbers (40 -> 40.0)
            SqlLiteral::Decimal(number) => write!(f, "{:?}", number),
            SqlLiteral::Integer(number) => write!(f, "{}", number),
            SqlLiteral::Null => f.write_str("NULL"),
        }
    }
}

/// Double every single quote so the text can sit inside a SQL string literal
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// A rendered `(…)` tuple for one service, in target column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTuple(String);

impl ValueTuple {
    /// Render literals as a parenthesised, comma-separated tuple
    pub fn from_literals(literals: &[SqlLiteral]) -> Self {
        let rendered: Vec<String> = literals.iter().map(ToString::to_string).collect();
        ValueTuple(format!("({})", rendered.join(", ")))
    }

    pub fn from_service(service: &ServiceRecord) -> Self {
        Self::from_literals(&[
            SqlLiteral::Text(service.name.clone()),
            SqlLiteral::Decimal(service.price),
            SqlLiteral::Integer(service.duration_minutes),
            SqlLiteral::Text(service.description.clone()),
            SqlLiteral::nullable_text(service.responsible_professional_id.as_deref()),
        ])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValueTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
