//! Transformation statistics and result structures
//!
//! This module provides types for tracking how many records were rendered or
//! skipped and for handing the rendered tuples to the SQL emitter.

use super::literal::ValueTuple;
use crate::app::models::RecordWarning;

/// Transformation result with rendered tuples, skip reasons and counters
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Rendered value-tuples, in input order
    pub tuples: Vec<ValueTuple>,

    /// One entry per skipped record, in input order
    pub warnings: Vec<RecordWarning>,

    pub stats: TransformStats,
}

impl TransformResult {
    pub fn has_valid_records(&self) -> bool {
        !self.tuples.is_empty()
    }
}

/// Simple transformation statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformStats {
    /// Total number of raw records encountered
    pub total_records: usize,

    /// Number of records rendered into value-tuples
    pub records_rendered: usize,

    /// Number of records skipped with a warning
    pub records_skipped: usize,
}

impl TransformStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_rendered as f64 / self.total_records as f64) * 100.0
        }
    }

    /// One-line summary for the console
    pub fn summary(&self) -> String {
        format!(
            "{} registros lidos, {} convertidos, {} ignorados",
            self.total_records, self.records_rendered, self.records_skipped
        )
    }
}
