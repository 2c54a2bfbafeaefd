//! Field parsing utilities for raw service records
//!
//! This module provides helper functions for pulling typed values out of a
//! [`RawRecord`], applying the JSON or CSV rules for trimming and for the
//! `NULL` sentinel.

use crate::app::models::{FieldValue, InputFormat, RawRecord, RecordIssue};
use crate::constants::{NULL_SENTINEL, REQUIRED_FIELDS};
use std::borrow::Cow;

/// Check that every required field is present and not null
pub fn check_required_fields(record: &RawRecord) -> Result<(), RecordIssue> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !record.has_value(field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RecordIssue::MissingFields { missing })
    }
}

/// Parse a required text field, rejecting values that are blank after trimming
pub fn parse_required_text(
    record: &RawRecord,
    field_name: &str,
) -> Result<String, RecordIssue> {
    let value = get_text(record, field_name).ok_or_else(|| RecordIssue::MissingFields {
        missing: vec![field_name.to_string()],
    })?;

    if value.trim().is_empty() {
        return Err(RecordIssue::EmptyName);
    }

    Ok(value)
}

/// Parse an optional text field, defaulting to the empty string
pub fn parse_optional_text(record: &RawRecord, field_name: &str) -> String {
    get_text(record, field_name).unwrap_or_default()
}

/// Parse a required decimal field from a number or numeric text
///
/// Non-finite values (`NaN`, `inf`) are rejected.
pub fn parse_required_decimal(record: &RawRecord, field_name: &str) -> Result<f64, RecordIssue> {
    let value = get_required_value(record, field_name)?;

    let parsed = match value {
        FieldValue::Number(number) => number.as_f64(),
        FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
        FieldValue::Null => None,
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or_else(|| invalid_number(field_name, value))
}

/// Parse a required integer field from a number or integer text
///
/// JSON numbers with a fractional part are truncated toward zero; text must be
/// a plain integer.
pub fn parse_required_integer(record: &RawRecord, field_name: &str) -> Result<i64, RecordIssue> {
    let value = get_required_value(record, field_name)?;

    let parsed = match value {
        FieldValue::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && float.abs() < i64::MAX as f64)
                .map(|float| float.trunc() as i64)
        }),
        FieldValue::Text(text) => text.trim().parse::<i64>().ok(),
        FieldValue::Null => None,
    };

    parsed.ok_or_else(|| invalid_number(field_name, value))
}

/// Parse the nullable identifier field
///
/// Returns `None` when the value is absent, empty, or the `NULL` sentinel.
/// CSV compares the sentinel case-insensitively, JSON compares it exactly.
pub fn parse_nullable_identifier(record: &RawRecord, field_name: &str) -> Option<String> {
    let value = get_text(record, field_name)?;

    let is_sentinel = match record.format {
        InputFormat::Csv => value.eq_ignore_ascii_case(NULL_SENTINEL),
        InputFormat::Json => value == NULL_SENTINEL,
    };

    if value.is_empty() || is_sentinel {
        None
    } else {
        Some(value)
    }
}

/// Get a field as text, trimmed for CSV and untouched for JSON
pub fn get_text(record: &RawRecord, field_name: &str) -> Option<String> {
    let text: Cow<'_, str> = record.get(field_name)?.as_text()?;

    match record.format {
        InputFormat::Csv => Some(text.trim().to_string()),
        InputFormat::Json => Some(text.into_owned()),
    }
}

fn get_required_value<'a>(
    record: &'a RawRecord,
    field_name: &str,
) -> Result<&'a FieldValue, RecordIssue> {
    record
        .get(field_name)
        .ok_or_else(|| RecordIssue::MissingFields {
            missing: vec![field_name.to_string()],
        })
}

fn invalid_number(field_name: &str, value: &FieldValue) -> RecordIssue {
    RecordIssue::InvalidNumber {
        field: field_name.to_string(),
        value: value.to_string(),
    }
}
