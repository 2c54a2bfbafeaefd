//! Command implementations for the services converter CLI
//!
//! This module contains the command execution logic, console reporting and
//! error handling for the CLI interface.

pub mod convert;
pub mod shared;

pub use shared::ConversionReport;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner
///
/// The converter has a single command; the input path must already be
/// present in `args`.
pub fn run(args: Args) -> Result<ConversionReport> {
    convert::run_convert(args)
}
