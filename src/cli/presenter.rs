//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Create a spinner; it stays invisible until `start_spinner` is called
    /// and never draws when stderr is not a terminal.
    pub fn spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        apply_spinner_style(&spinner);
        spinner
    }

    /// Show the spinner with a message
    pub fn start_spinner(&self, spinner: &ProgressBar, message: &str) {
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, spinner: &ProgressBar, message: &str) {
        spinner.finish_with_message(format!("{} {}", "✓".green(), message));
    }

    /// Stop spinner without status; a finished spinner keeps its last line
    pub fn stop_spinner(&self, spinner: &ProgressBar) {
        if !spinner.is_finished() {
            spinner.finish_and_clear();
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }
}

fn apply_spinner_style(spinner: &ProgressBar) {
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
}
