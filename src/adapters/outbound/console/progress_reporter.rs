use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so rendered reports on stdout stay clean. A spinner
/// runs while a request is in flight and is cleared by the next message.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_loading(&self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.green())
        );
    }
}
