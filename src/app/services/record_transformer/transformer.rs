//! Core record transformer implementation
//!
//! Validates each raw record, coerces its fields into a [`ServiceRecord`] and
//! renders the value-tuple. Invalid records are skipped and reported; they
//! never stop the run.

use tracing::{debug, info};

use super::field_parsers::{
    check_required_fields, parse_nullable_identifier, parse_optional_text, parse_required_decimal,
    parse_required_integer, parse_required_text,
};
use super::literal::ValueTuple;
use super::progress::ProgressReporter;
use super::stats::{TransformResult, TransformStats};
use crate::app::models::{RawRecord, RecordIssue, RecordWarning, ServiceRecord};
use crate::constants::{
    FIELD_DESCRIPTION, FIELD_DURATION_MINUTES, FIELD_NAME, FIELD_PRICE,
    FIELD_RESPONSIBLE_PROFESSIONAL_ID,
};

/// Transformer from raw input records to SQL value-tuples
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer;

impl RecordTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Transform all records without any console output
    pub fn transform(&self, records: &[RawRecord]) -> TransformResult {
        self.transform_with_progress(records, &ProgressReporter::silent())
    }

    /// Transform all records, reporting progress and warnings as they happen
    pub fn transform_with_progress(
        &self,
        records: &[RawRecord],
        reporter: &ProgressReporter,
    ) -> TransformResult {
        let mut stats = TransformStats::new();
        let mut tuples = Vec::with_capacity(records.len());
        let mut warnings = Vec::new();

        reporter.start(records.len());
        for record in records {
            stats.total_records += 1;

            match self.validate_record(record) {
                Ok(service) => {
                    tuples.push(ValueTuple::from_service(&service));
                    stats.records_rendered += 1;
                }
                Err(issue) => {
                    let warning = RecordWarning {
                        position: record.position,
                        format: record.format,
                        issue,
                    };
                    debug!("Skipping record: {}", warning);
                    reporter.report_warning(&warning);
                    warnings.push(warning);
                    stats.records_skipped += 1;
                }
            }

            reporter.increment();
        }

        reporter.finish();
        info!(
            "Transformed {} of {} records ({:.1}% success)",
            stats.records_rendered,
            stats.total_records,
            stats.success_rate()
        );

        TransformResult {
            tuples,
            warnings,
            stats,
        }
    }

    /// Validate and coerce one raw record
    pub fn validate_record(&self, record: &RawRecord) -> Result<ServiceRecord, RecordIssue> {
        check_required_fields(record)?;

        let name = parse_required_text(record, FIELD_NAME)?;
        let price = parse_required_decimal(record, FIELD_PRICE)?;
        let duration_minutes = parse_required_integer(record, FIELD_DURATION_MINUTES)?;
        let description = parse_optional_text(record, FIELD_DESCRIPTION);
        let responsible_professional_id =
            parse_nullable_identifier(record, FIELD_RESPONSIBLE_PROFESSIONAL_ID);

        Ok(ServiceRecord {
            name,
            price,
            duration_minutes,
            description,
            responsible_professional_id,
        })
    }

    /// Validate one raw record and render its value-tuple
    pub fn render_record(&self, record: &RawRecord) -> Result<ValueTuple, RecordIssue> {
        self.validate_record(record)
            .map(|service| ValueTuple::from_service(&service))
    }
}
