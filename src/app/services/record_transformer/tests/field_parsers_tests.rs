//! Tests for typed field extraction

use super::*;
use crate::app::models::RecordIssue;
use crate::app::services::record_transformer::field_parsers::{
    check_required_fields, parse_nullable_identifier, parse_optional_text,
    parse_required_decimal, parse_required_integer, parse_required_text,
};
use serde_json::json;

#[test]
fn test_required_fields_reported_in_order() {
    let record = csv_record(1, &[("name", "Corte")]);

    assert_eq!(
        check_required_fields(&record),
        Err(RecordIssue::MissingFields {
            missing: vec!["price".to_string(), "duration_minutes".to_string()],
        })
    );
}

#[test]
fn test_json_null_counts_as_missing() {
    let record = json_record(1, json!({"name": "Corte", "price": null, "duration_minutes": 30}));

    assert_eq!(
        check_required_fields(&record),
        Err(RecordIssue::MissingFields {
            missing: vec!["price".to_string()],
        })
    );
}

#[test]
fn test_required_text_blank_rejected() {
    let record = csv_record(1, &[("name", "   ")]);
    assert_eq!(parse_required_text(&record, "name"), Err(RecordIssue::EmptyName));

    let record = json_record(1, json!({"name": ""}));
    assert_eq!(parse_required_text(&record, "name"), Err(RecordIssue::EmptyName));
}

#[test]
fn test_text_trimmed_for_csv_only() {
    let record = csv_record(1, &[("name", "  Corte  ")]);
    assert_eq!(parse_required_text(&record, "name").unwrap(), "Corte");

    let record = json_record(1, json!({"name": "  Corte  "}));
    assert_eq!(parse_required_text(&record, "name").unwrap(), "  Corte  ");
}

#[test]
fn test_optional_text_defaults_to_empty() {
    let record = json_record(1, json!({"description": null}));
    assert_eq!(parse_optional_text(&record, "description"), "");

    let record = csv_record(1, &[]);
    assert_eq!(parse_optional_text(&record, "description"), "");
}

#[test]
fn test_decimal_parsing() {
    let record = json_record(1, json!({"price": 25.5}));
    assert_eq!(parse_required_decimal(&record, "price").unwrap(), 25.5);

    let record = json_record(1, json!({"price": "40"}));
    assert_eq!(parse_required_decimal(&record, "price").unwrap(), 40.0);

    let record = csv_record(1, &[("price", " 0 ")]);
    assert_eq!(parse_required_decimal(&record, "price").unwrap(), 0.0);
}

#[test]
fn test_decimal_parsing_failures() {
    let record = csv_record(1, &[("price", "")]);
    assert_eq!(
        parse_required_decimal(&record, "price"),
        Err(RecordIssue::InvalidNumber {
            field: "price".to_string(),
            value: "''".to_string(),
        })
    );

    let record = csv_record(1, &[("price", "R$ 10")]);
    assert!(parse_required_decimal(&record, "price").is_err());

    let record = csv_record(1, &[("price", "NaN")]);
    assert!(parse_required_decimal(&record, "price").is_err());

    let record = json_record(1, json!({"price": "inf"}));
    assert!(parse_required_decimal(&record, "price").is_err());
}

#[test]
fn test_integer_parsing() {
    let record = json_record(1, json!({"duration_minutes": 30}));
    assert_eq!(parse_required_integer(&record, "duration_minutes").unwrap(), 30);

    let record = json_record(1, json!({"duration_minutes": "45"}));
    assert_eq!(parse_required_integer(&record, "duration_minutes").unwrap(), 45);

    // Fractional JSON numbers truncate toward zero
    let record = json_record(1, json!({"duration_minutes": 30.9}));
    assert_eq!(parse_required_integer(&record, "duration_minutes").unwrap(), 30);

    let record = csv_record(1, &[("duration_minutes", "0")]);
    assert_eq!(parse_required_integer(&record, "duration_minutes").unwrap(), 0);
}

#[test]
fn test_integer_parsing_failures() {
    let record = csv_record(1, &[("duration_minutes", "30.5")]);
    assert_eq!(
        parse_required_integer(&record, "duration_minutes"),
        Err(RecordIssue::InvalidNumber {
            field: "duration_minutes".to_string(),
            value: "'30.5'".to_string(),
        })
    );

    let record = csv_record(1, &[("duration_minutes", "meia hora")]);
    assert!(parse_required_integer(&record, "duration_minutes").is_err());
}

#[test]
fn test_nullable_identifier_csv_is_case_insensitive() {
    for cell in ["", "   ", "NULL", "null", "Null"] {
        let record = csv_record(1, &[("responsible_professional_id", cell)]);
        assert_eq!(
            parse_nullable_identifier(&record, "responsible_professional_id"),
            None,
            "cell {:?} should be NULL",
            cell
        );
    }

    let record = csv_record(1, &[("responsible_professional_id", " abc-123 ")]);
    assert_eq!(
        parse_nullable_identifier(&record, "responsible_professional_id"),
        Some("abc-123".to_string())
    );
}

#[test]
fn test_nullable_identifier_json_is_case_sensitive() {
    for value in [json!(null), json!(""), json!("NULL")] {
        let record = json_record(1, json!({"responsible_professional_id": value}));
        assert_eq!(
            parse_nullable_identifier(&record, "responsible_professional_id"),
            None
        );
    }

    let record = json_record(1, json!({"responsible_professional_id": "null"}));
    assert_eq!(
        parse_nullable_identifier(&record, "responsible_professional_id"),
        Some("null".to_string())
    );

    let record = json_record(1, json!({}));
    assert_eq!(
        parse_nullable_identifier(&record, "responsible_professional_id"),
        None
    );
}
