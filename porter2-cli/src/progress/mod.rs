//! Progress bar for multi-file stemming runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const TEMPLATE: &str = concat!(
    "{spinner:.green} [{elapsed_precise}] ",
    "{wide_bar:.cyan/blue} {pos}/{len} files {msg}"
);

/// Tracks stemmed files and tokens; draws nothing when hidden
pub struct StemProgress {
    bar: Option<ProgressBar>,
    tokens: AtomicU64,
}

impl StemProgress {
    /// Start tracking `files` input files
    pub fn start(files: usize, hidden: bool) -> Self {
        let bar = (!hidden).then(|| {
            let bar = ProgressBar::new(files as u64);
            if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
                bar.set_style(style.progress_chars("=> "));
            }
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });

        Self {
            bar,
            tokens: AtomicU64::new(0),
        }
    }

    /// Record one stemmed file; safe to call from worker threads
    pub fn file_stemmed(&self, label: &str, tokens: usize) {
        self.tokens.fetch_add(tokens as u64, Ordering::Relaxed);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{label} ({tokens} tokens)"));
            bar.inc(1);
        }
    }

    /// Tokens recorded so far
    pub fn tokens(&self) -> u64 {
        self.tokens.load(Ordering::Relaxed)
    }

    /// Close the bar with a token summary
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} tokens stemmed", self.tokens()));
        }
    }

    /// Whether a bar is being drawn
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}
