//! Test fixtures for record transformer testing
//!
//! Helpers for building JSON and CSV raw records the way the input reader
//! produces them.

use crate::app::models::{FieldValue, InputFormat, RawRecord};

// Test modules
mod field_parsers_tests;

/// Build a CSV record from `(header, cell)` pairs
pub fn csv_record(position: usize, cells: &[(&str, &str)]) -> RawRecord {
    cells
        .iter()
        .fold(RawRecord::new(position, InputFormat::Csv), |record, (name, cell)| {
            record.with_field(*name, FieldValue::Text(cell.to_string()))
        })
}

/// Build a JSON record from an object literal
pub fn json_record(position: usize, object: serde_json::Value) -> RawRecord {
    let mut record = RawRecord::new(position, InputFormat::Json);
    if let serde_json::Value::Object(map) = object {
        for (key, value) in map {
            record.insert(key, FieldValue::from_json(value));
        }
    }
    record
}

/// A complete, valid CSV record
pub fn valid_csv_record(position: usize) -> RawRecord {
    csv_record(
        position,
        &[
            ("name", "Corte Masculino"),
            ("price", "35.00"),
            ("duration_minutes", "30"),
            ("description", "Corte com máquina e tesoura"),
            ("responsible_professional_id", ""),
        ],
    )
}
