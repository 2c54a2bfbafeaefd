//! Progress reporting for record transformation
//!
//! Drives an optional progress bar over the input records and prints the
//! per-record warnings to stdout without garbling the bar.

use crate::app::models::RecordWarning;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Progress reporter for the transformation stage
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    echo_warnings: bool,
}

impl ProgressReporter {
    /// Reporter that draws nothing and prints nothing
    pub fn silent() -> Self {
        Self {
            progress_bar: None,
            echo_warnings: false,
        }
    }

    /// Reporter for interactive runs
    ///
    /// Warnings are always echoed; the bar is only drawn when `show_bar` is set.
    pub fn console(show_bar: bool) -> Self {
        let progress_bar = show_bar.then(|| {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} registros | {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb.set_message("Convertendo serviços");
            pb
        });

        Self {
            progress_bar,
            echo_warnings: true,
        }
    }

    /// Size the bar for the records about to be transformed
    pub fn start(&self, total_records: usize) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_length(total_records as u64);
            debug!("Progress bar initialized for {} records", total_records);
        }
    }

    /// Advance by one record
    pub fn increment(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
    }

    /// Print a skipped-record warning above the bar
    pub fn report_warning(&self, warning: &RecordWarning) {
        if !self.echo_warnings {
            return;
        }

        let line = format!("⚠️  Aviso: {}", warning);
        self.suspend(|| println!("{}", line.yellow()));
    }

    /// Finish and remove the bar
    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Suspend progress bar to allow clean console output
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if let Some(ref pb) = self.progress_bar {
            pb.suspend(f)
        } else {
            f()
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::silent()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}
