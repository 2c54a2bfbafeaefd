//! Shared components for CLI commands
//!
//! This module contains the run report, logging setup and console helpers
//! used by the convert command and the binary entry point.

use crate::Result;
use crate::app::services::record_transformer::TransformStats;
use crate::cli::args::Args;
use crate::constants::{DEFAULT_OUTPUT_FILE, SEPARATOR_WIDTH, USAGE_EXAMPLES};
use std::path::PathBuf;
use tracing::debug;

/// Summary of a finished conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Record counters from the transformation stage
    pub stats: TransformStats,
    /// Where the SQL was written, `None` for dry runs
    pub output_path: Option<PathBuf>,
    /// Size of the generated SQL in bytes
    pub sql_bytes: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once keeps the first subscriber.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("services_sql={}", log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_err() {
        debug!("Logging already initialized, keeping existing subscriber");
    } else {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Horizontal rule used around the SQL echo
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Usage banner shown when no input file is given
pub fn usage_text(program: &str) -> String {
    let mut lines = vec![
        "📋 Conversor de Serviços para SQL".to_string(),
        separator(),
        String::new(),
        "Uso:".to_string(),
        format!("  {} <arquivo.json>", program),
        format!("  {} <arquivo.csv>", program),
        String::new(),
        "Exemplos:".to_string(),
    ];
    lines.extend(
        USAGE_EXAMPLES
            .iter()
            .map(|example| format!("  {} {}", program, example)),
    );
    lines.push(String::new());
    lines.push(format!(
        "O SQL será exibido no terminal e salvo em '{}'",
        DEFAULT_OUTPUT_FILE
    ));
    lines.push(format!("Use '{} --help' para todas as opções.", program));
    lines.join("\n")
}
