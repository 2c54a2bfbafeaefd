//! End-to-end conversion pipeline
//!
//! Runs the three stages in order: read the input file, transform its records
//! into value-tuples, and render the SQL document. Writing the document is a
//! separate step so callers can still show the SQL when the write fails.

use crate::app::models::{InputFormat, RecordWarning};
use crate::app::services::input_reader::read_input;
use crate::app::services::record_transformer::{ProgressReporter, RecordTransformer, TransformStats};
use crate::app::services::sql_emitter::{OutputDocument, SqlEmitter};
use crate::config::ConverterConfig;
use crate::Result;
use std::path::Path;
use tracing::info;

/// Everything a successful conversion produced
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub format: InputFormat,
    pub stats: TransformStats,
    pub warnings: Vec<RecordWarning>,
    pub document: OutputDocument,
}

/// Converter bound to one configuration
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    transformer: RecordTransformer,
    emitter: SqlEmitter,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        let emitter = SqlEmitter::new(&config);
        Self {
            config,
            transformer: RecordTransformer::new(),
            emitter,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read, transform and render without any console output
    pub fn convert(&self, input_path: &Path) -> Result<ConversionOutcome> {
        self.convert_with_progress(input_path, &ProgressReporter::silent())
    }

    /// Read, transform and render, reporting per-record progress
    ///
    /// Fails with the reader's error, or with `NoValidRecords` when every
    /// record was skipped. Nothing is written.
    pub fn convert_with_progress(
        &self,
        input_path: &Path,
        reporter: &ProgressReporter,
    ) -> Result<ConversionOutcome> {
        let input = read_input(input_path)?;

        let transform = self
            .transformer
            .transform_with_progress(&input.records, reporter);

        let document = self.emitter.render(&input.source_name, &transform.tuples)?;

        info!(
            "Converted {}: {}",
            input.source_name,
            transform.stats.summary()
        );

        Ok(ConversionOutcome {
            format: input.format,
            stats: transform.stats,
            warnings: transform.warnings,
            document,
        })
    }

    /// Write the rendered document to the configured output path
    pub fn write(&self, outcome: &ConversionOutcome) -> Result<()> {
        self.emitter
            .write(&outcome.document, &self.config.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_convert_and_write() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("servicos.csv");
        std::fs::write(
            &input_path,
            "name,price,duration_minutes\nCorte,30,30\nSem preço,,20\n",
        )
        .unwrap();

        let output_path = temp_dir.path().join("out.sql");
        let converter = Converter::new(ConverterConfig::with_output_path(&output_path));

        let outcome = converter.convert(&input_path).unwrap();
        assert_eq!(outcome.format, InputFormat::Csv);
        assert_eq!(outcome.stats.records_rendered, 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(!output_path.exists());

        converter.write(&outcome).unwrap();
        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("-- SQL gerado automaticamente a partir de: servicos.csv"));
        assert!(written.contains("('Corte', 30.0, 30, '', NULL)"));
    }

    #[test]
    fn test_convert_without_valid_records() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("vazio.json");
        std::fs::write(&input_path, "[]").unwrap();

        let converter = Converter::new(ConverterConfig::default());
        let error = converter.convert(&input_path).unwrap_err();

        assert!(matches!(error, Error::NoValidRecords));
    }
}
