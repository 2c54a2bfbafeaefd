//! Convert command implementation
//!
//! Drives the read → transform → emit pipeline for one input file and owns
//! every line the user sees on stdout: the progress banner, skipped-record
//! warnings, the SQL echo and the next-step guidance.

use super::shared::{ConversionReport, separator, setup_logging};
use crate::Result;
use crate::app::services::converter::{ConversionOutcome, Converter};
use crate::app::services::input_reader::detect_input;
use crate::app::services::record_transformer::ProgressReporter;
use crate::cli::args::Args;
use crate::constants::NEXT_STEPS;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, error, info};

/// Convert command runner
pub fn run_convert(args: Args) -> Result<ConversionReport> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let input_path = args.get_input_path()?;
    let config = args.to_config();
    debug!("Loaded configuration: {:?}", config);

    let format = detect_input(&input_path)?;
    println!("📄 Convertendo {}: {}", format, input_path.display());

    let converter = Converter::new(config);
    let reporter = ProgressReporter::console(args.show_progress());
    let outcome = converter.convert_with_progress(&input_path, &reporter)?;

    let output_path = if converter.config().dry_run {
        info!("Dry run, skipping write to {}", converter.config().output_path.display());
        None
    } else {
        if let Err(write_error) = converter.write(&outcome) {
            error!("Failed to write output: {}", write_error);
            // Still hand the SQL to the user so it can be copied manually
            print_sql(&outcome);
            return Err(write_error);
        }
        Some(converter.config().output_path.clone())
    };

    print_success(&outcome, output_path.as_deref());

    Ok(ConversionReport {
        stats: outcome.stats,
        output_path,
        sql_bytes: outcome.document.sql.len(),
        processing_time: start_time.elapsed(),
    })
}

fn print_success(outcome: &ConversionOutcome, output_path: Option<&std::path::Path>) {
    println!();
    println!("{}", "✅ SQL gerado com sucesso!".green().bold());
    match output_path {
        Some(path) => println!("📁 Arquivo salvo em: {}", path.display()),
        None => println!("📁 Simulação (--dry-run): nenhum arquivo foi gravado"),
    }
    println!("📊 {}", outcome.stats.summary());

    print_sql(outcome);

    println!();
    println!("💡 Próximos passos:");
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        println!("   {}. {}", index + 1, step);
    }
}

fn print_sql(outcome: &ConversionOutcome) {
    println!();
    println!("{}", separator());
    println!("SQL Gerado:");
    println!("{}", separator());
    println!("{}", outcome.document.sql);
}
