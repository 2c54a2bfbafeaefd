//! Application constants for the services converter
//!
//! This module contains the fixed target table shape, field names, default
//! paths and console text used throughout the converter.

// =============================================================================
// Target Table
// =============================================================================

/// Schema holding the services table
pub const TARGET_SCHEMA: &str = "public";

/// Table receiving the generated rows
pub const TARGET_TABLE: &str = "services";

/// Columns written by the INSERT, in value-tuple order
pub const TARGET_COLUMNS: &[&str] = &[
    FIELD_NAME,
    FIELD_PRICE,
    FIELD_DURATION_MINUTES,
    FIELD_DESCRIPTION,
    FIELD_RESPONSIBLE_PROFESSIONAL_ID,
];

/// Columns listed by the verification SELECT
pub const VERIFICATION_COLUMNS: &[&str] = &[
    "id",
    FIELD_NAME,
    FIELD_PRICE,
    FIELD_DURATION_MINUTES,
    FIELD_DESCRIPTION,
    "created_at",
];

// =============================================================================
// Record Fields
// =============================================================================

pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_DURATION_MINUTES: &str = "duration_minutes";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_RESPONSIBLE_PROFESSIONAL_ID: &str = "responsible_professional_id";

/// Fields every record must carry
pub const REQUIRED_FIELDS: &[&str] = &[FIELD_NAME, FIELD_PRICE, FIELD_DURATION_MINUTES];

/// Text that stands for "no professional assigned"
pub const NULL_SENTINEL: &str = "NULL";

// =============================================================================
// Input / Output
// =============================================================================

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "output-services.sql";

/// Recognised input extensions (lowercase, without the dot)
pub const JSON_EXTENSION: &str = "json";
pub const CSV_EXTENSION: &str = "csv";

/// Byte order mark some spreadsheet tools put in front of CSV exports
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Console Output
// =============================================================================

/// Width of the `=` rule printed around the SQL echo
pub const SEPARATOR_WIDTH: usize = 50;

/// Rule used in the generated SQL header comment
pub const HEADER_RULE: &str = "-- ============================================";

/// Steps printed after a successful run
pub const NEXT_STEPS: &[&str] = &[
    "Copie o SQL acima",
    "Cole no SQL Editor do Supabase",
    "Execute o script",
];

/// Usage examples shown when no input file is given
pub const USAGE_EXAMPLES: &[&str] = &["services-template.json", "meus-servicos.csv"];
