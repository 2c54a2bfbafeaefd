//! Configuration management and validation.
//!
//! Provides the settings for a conversion run: where the SQL document is
//! written, which table it targets, and whether the write is skipped.

use crate::constants::{DEFAULT_OUTPUT_FILE, TARGET_SCHEMA, TARGET_TABLE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// File receiving the generated SQL (overwritten each run)
    pub output_path: PathBuf,

    /// Schema holding the target table
    pub schema: String,

    /// Target table name
    pub table: String,

    /// Generate and echo the SQL without writing the output file
    pub dry_run: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            schema: TARGET_SCHEMA.to_string(),
            table: TARGET_TABLE.to_string(),
            dry_run: false,
        }
    }
}

impl ConverterConfig {
    /// Create a configuration writing to the given path
    pub fn with_output_path(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Fully qualified table name, e.g. `public.services`
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(Error::configuration("Target table name cannot be empty"));
        }

        if self.schema.trim().is_empty() {
            return Err(Error::configuration("Target schema name cannot be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }

        if self.output_path.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is a directory: {}",
                self.output_path.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
