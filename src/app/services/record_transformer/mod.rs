//! Record transformer for raw service records
//!
//! Turns the raw records produced by the input reader into SQL value-tuples.
//!
//! ## Architecture
//!
//! - [`transformer`] - Per-record validation and the transformation loop
//! - [`field_parsers`] - Typed field extraction with JSON/CSV rules
//! - [`literal`] - Typed SQL literals, escaping and value-tuple rendering
//! - [`progress`] - Progress bar and warning echo
//! - [`stats`] - Transformation statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use services_sql::app::models::{FieldValue, InputFormat, RawRecord};
//! use services_sql::app::services::record_transformer::RecordTransformer;
//!
//! let record = RawRecord::new(1, InputFormat::Csv)
//!     .with_field("name", FieldValue::Text("Corte".to_string()))
//!     .with_field("price", FieldValue::Text("25".to_string()))
//!     .with_field("duration_minutes", FieldValue::Text("30".to_string()));
//!
//! let result = RecordTransformer::new().transform(&[record]);
//! assert_eq!(result.tuples[0].as_str(), "('Corte', 25.0, 30, '', NULL)");
//! ```

pub mod field_parsers;
pub mod literal;
pub mod progress;
pub mod stats;
pub mod transformer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use literal::{SqlLiteral, ValueTuple, escape_sql_string};
pub use progress::ProgressReporter;
pub use stats::{TransformResult, TransformStats};
pub use transformer::RecordTransformer;
