use clap::Parser;
use colored::Colorize;
use services_sql::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Without an input file, show usage and fail like any other bad invocation
    if args.input_path.is_none() {
        println!("{}", commands::shared::usage_text("services-sql"));
        process::exit(1);
    }

    match commands::run(args) {
        Ok(_report) => {
            // Success - summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{}", format!("❌ {}", error).red());
            eprintln!("{}", "❌ Falha ao gerar SQL".red());
            process::exit(1);
        }
    }
}
