//! Services SQL Converter Library
//!
//! A small Rust library for turning service catalogues kept in JSON or CSV
//! files into a single SQL `INSERT` statement for the `public.services` table.
//!
//! This library provides tools for:
//! - Reading JSON arrays of objects and header-mapped CSV tables into raw records
//! - Validating required fields and coercing prices and durations
//! - Escaping text and rendering typed SQL literals into value-tuples
//! - Emitting the final SQL document with a verification `SELECT`

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod input_reader;
        pub mod record_transformer;
        pub mod sql_emitter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, InputFormat, RawRecord, ServiceRecord};
pub use config::ConverterConfig;

/// Result type alias for the services converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for conversion runs
///
/// Every variant is fatal for the run. Problems with individual records are
/// reported as [`app::models::RecordWarning`] instead and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed while reading the input
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("Arquivo não encontrado: {path}")]
    FileNotFound { path: String },

    /// Input extension is neither .json nor .csv
    #[error("Formato não suportado: {extension} (use arquivos .json ou .csv)")]
    UnsupportedFormat { extension: String },

    /// JSON parsing error
    #[error("Erro ao ler arquivo JSON '{file}': {message}")]
    JsonParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// CSV parsing error
    #[error("Erro ao ler arquivo CSV '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Every input record was skipped
    #[error("Nenhum serviço válido encontrado!")]
    NoValidRecords,

    /// Output file could not be written
    #[error("Falha ao gravar '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a JSON parsing error with context
    pub fn json_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an output write error
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures that happen before any record is transformed
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::FileNotFound { .. }
                | Self::UnsupportedFormat { .. }
                | Self::JsonParsing { .. }
                | Self::CsvParsing { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}
