//! Core data structures for service conversion
//!
//! Defines the raw record shape produced by the input reader, the validated
//! service record consumed by the SQL emitter, and the per-record warning
//! type used to report skipped input.

use crate::constants::{CSV_EXTENSION, JSON_EXTENSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Input formats understood by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Detect the input format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            JSON_EXTENSION => Ok(InputFormat::Json),
            CSV_EXTENSION => Ok(InputFormat::Csv),
            "" => Err(Error::unsupported_format("(sem extensão)")),
            other => Err(Error::unsupported_format(format!(".{}", other))),
        }
    }

    /// Upper-case label used in console messages
    pub fn label(&self) -> &'static str {
        match self {
            InputFormat::Json => "JSON",
            InputFormat::Csv => "CSV",
        }
    }

    /// Noun used to point at one record in warnings
    pub fn record_noun(&self) -> &'static str {
        match self {
            InputFormat::Json => "Serviço",
            InputFormat::Csv => "Linha",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field value as it appeared in the input
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Null,
}

impl FieldValue {
    /// Convert a JSON value, keeping strings and numbers distinct
    ///
    /// Booleans, arrays and objects are kept as their JSON text.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::String(text) => FieldValue::Text(text),
            serde_json::Value::Number(number) => FieldValue::Number(number),
            other => FieldValue::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Textual form of the value, `None` for null
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
            FieldValue::Number(number) => Some(Cow::Owned(number.to_string())),
            FieldValue::Null => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "'{}'", text),
            FieldValue::Number(number) => write!(f, "{}", number),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

/// One input row or object, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based position in the input
    pub position: usize,
    pub format: InputFormat,
    pub fields: HashMap<String, FieldValue>,
}

impl RawRecord {
    pub fn new(position: usize, format: InputFormat) -> Self {
        Self {
            position,
            format,
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion, mostly for tests and fixtures
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Present and not null
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_null())
    }
}

/// A validated service ready to be rendered as SQL
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub name: String,
    pub price: f64,
    pub duration_minutes: i64,
    pub description: String,
    pub responsible_professional_id: Option<String>,
}

/// Why a record was skipped
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordIssue {
    #[error("está faltando campos obrigatórios ({})", .missing.join(", "))]
    MissingFields { missing: Vec<String> },

    #[error("tem o campo name vazio")]
    EmptyName,

    #[error("tem valor inválido para {field}: {value}")]
    InvalidNumber { field: String, value: String },
}

/// A skipped record and the reason it was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct RecordWarning {
    pub position: usize,
    pub format: InputFormat,
    pub issue: RecordIssue,
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} {}",
            self.format.record_noun(),
            self.position,
            self.issue
        )
    }
}
