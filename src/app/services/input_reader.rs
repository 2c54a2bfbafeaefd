//! Input reader for service catalogues
//!
//! Loads a JSON array of objects or a header-mapped CSV table into an ordered
//! list of [`RawRecord`]s. The format is picked from the file extension; no
//! validation of field contents happens here.

use crate::app::models::{FieldValue, InputFormat, RawRecord};
use crate::constants::UTF8_BOM;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Records loaded from one input file
#[derive(Debug, Clone)]
pub struct InputDocument {
    pub format: InputFormat,
    /// File name without directories, as shown in the SQL header
    pub source_name: String,
    pub records: Vec<RawRecord>,
}

/// Check that the input exists and has a supported extension
pub fn detect_input(file_path: &Path) -> Result<InputFormat> {
    if !file_path.exists() {
        return Err(Error::file_not_found(file_path.display().to_string()));
    }

    InputFormat::from_path(file_path)
}

/// Read an input file, dispatching on its extension
pub fn read_input(file_path: &Path) -> Result<InputDocument> {
    let format = detect_input(file_path)?;
    read_input_as(file_path, format)
}

/// Read an input file whose format is already known
pub fn read_input_as(file_path: &Path, format: InputFormat) -> Result<InputDocument> {
    info!("Reading {} input: {}", format, file_path.display());

    let content = std::fs::read_to_string(file_path).map_err(|e| {
        Error::io(
            format!("Failed to read file {}", file_path.display()),
            e,
        )
    })?;

    let file_name = source_name(file_path);
    let records = match format {
        InputFormat::Json => parse_json_records(&content, &file_name)?,
        InputFormat::Csv => parse_csv_records(&content, &file_name)?,
    };

    debug!("Loaded {} raw records from {}", records.len(), file_name);

    Ok(InputDocument {
        format,
        source_name: file_name,
        records,
    })
}

/// Parse a JSON array of objects
///
/// Elements that are not objects yield records without fields so that the
/// transformer reports them at their position.
pub fn parse_json_records(content: &str, file_name: &str) -> Result<Vec<RawRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| Error::json_parsing(file_name, e.to_string(), Some(e)))?;

    let serde_json::Value::Array(items) = value else {
        return Err(Error::json_parsing(
            file_name,
            "expected a top-level array of service objects",
            None,
        ));
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let mut record = RawRecord::new(index + 1, InputFormat::Json);
            if let serde_json::Value::Object(object) = item {
                for (key, value) in object {
                    record.insert(key, FieldValue::from_json(value));
                }
            } else {
                debug!("JSON element #{} is not an object", index + 1);
            }
            record
        })
        .collect();

    Ok(records)
}

/// Parse a CSV table whose first row names the fields
///
/// Cells are kept as text exactly as read; rows shorter than the header leave
/// the trailing fields absent and extra cells are ignored.
pub fn parse_csv_records(content: &str, file_name: &str) -> Result<Vec<RawRecord>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(file_name, format!("Failed to read CSV headers: {}", e), Some(e)))?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    debug!("CSV headers: {:?}", headers);

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let row = result.map_err(|e| {
            Error::csv_parsing(file_name, format!("Failed to read row {}: {}", index + 1, e), Some(e))
        })?;

        let mut record = RawRecord::new(index + 1, InputFormat::Csv);
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.clone(), FieldValue::Text(cell.to_string()));
        }
        records.push(record);
    }

    Ok(records)
}

fn source_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string())
}
