//! Command-line argument definitions for the services converter
//!
//! This module defines the CLI interface using clap derive API.

use crate::config::ConverterConfig;
use crate::constants::DEFAULT_OUTPUT_FILE;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the services converter
///
/// Converts a JSON or CSV list of services into a SQL INSERT for the
/// `public.services` table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "services-sql",
    version,
    about = "Convert JSON or CSV service lists into a SQL INSERT statement",
    long_about = "Reads a JSON array of service objects or a CSV table with a header row \
                  (name, price, duration_minutes, description, responsible_professional_id) \
                  and writes a single INSERT ... ON CONFLICT DO NOTHING statement plus a \
                  verification SELECT. Invalid records are skipped with a warning."
)]
pub struct Args {
    /// Input file (.json or .csv)
    ///
    /// Optional at the parser level so that running without it prints the
    /// usage banner instead of a clap error.
    #[arg(value_name = "INPUT", help = "Input file (.json or .csv)")]
    pub input_path: Option<PathBuf>,

    /// Output path for the generated SQL
    ///
    /// Overwritten on every run.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output path for the generated SQL"
    )]
    pub output_path: PathBuf,

    /// Print the SQL without writing the output file
    #[arg(
        long = "dry-run",
        help = "Show the generated SQL without writing the output file"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress logging and the progress bar
    ///
    /// Warnings for skipped records and the generated SQL are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logs and progress bar",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Input path, required once the usage banner case has been handled
    pub fn get_input_path(&self) -> Result<PathBuf> {
        self.input_path
            .clone()
            .ok_or_else(|| Error::configuration("No input file given"))
    }

    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.get_input_path()?;
        self.to_config().validate()
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> ConverterConfig {
        ConverterConfig {
            dry_run: self.dry_run,
            ..ConverterConfig::with_output_path(&self.output_path)
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("services-sql").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["servicos.json"]);

        assert_eq!(args.input_path, Some(PathBuf::from("servicos.json")));
        assert_eq!(args.output_path, PathBuf::from("output-services.sql"));
        assert!(!args.dry_run);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_progress());
    }

    #[test]
    fn test_missing_input_is_not_a_parse_error() {
        let args = parse(&[]);

        assert!(args.input_path.is_none());
        assert!(matches!(
            args.get_input_path(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_output_and_dry_run() {
        let args = parse(&["servicos.csv", "-o", "custom.sql", "--dry-run"]);
        let config = args.to_config();

        assert_eq!(config.output_path, PathBuf::from("custom.sql"));
        assert!(config.dry_run);
        assert_eq!(config.qualified_table(), "public.services");
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&["servicos.json"]);

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["services-sql", "a.json", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_directory_output() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = parse(&["servicos.json"]);
        args.output_path = temp_dir.path().to_path_buf();

        assert!(args.validate().is_err());
    }
}
