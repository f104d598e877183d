// src/commands/progress.rs
//! Terminal progress bars for batch operations
//!
//! indicatif-backed implementation of the library's `ProgressReporter`;
//! the bar is created lazily on `begin` because the total is only known
//! once the inventory stage has run.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use orgsync::ProgressReporter;

pub struct CliProgress {
    operation: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            bar: Mutex::new(None),
        }
    }
}

impl ProgressReporter for CliProgress {
    fn begin(&self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} ({pos}/{len}) [{bar:40.green/dim}] {percent}%")
                .expect("Invalid progress bar template")
                .progress_chars("##-"),
        );
        bar.set_message(self.operation.clone());
        *self.bar.lock().unwrap() = Some(bar);
    }

    fn advance(&self, completed: u64) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.set_position(completed);
        }
    }

    fn message(&self, message: &str) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.set_message(format!("{}: {}", self.operation, message));
        }
    }

    fn finish(&self, message: &str) {
        if let Some(bar) = self.bar.lock().unwrap().as_ref() {
            bar.finish_with_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_before_begin_is_harmless() {
        let progress = CliProgress::new("test");
        progress.advance(1);
        progress.message("noop");
        progress.finish("done");
    }

    #[test]
    fn test_full_cycle() {
        let progress = CliProgress::new("test");
        progress.begin(2);
        progress.advance(1);
        progress.advance(2);
        progress.finish("done");
    }
}
