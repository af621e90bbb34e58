//! Output formatting module

use anyhow::Result;
use porter2_core::CacheStats;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single word and its stem
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()>;

    /// Output cache statistics after the stems
    fn format_stats(&mut self, stats: &CacheStats) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::{JsonFormatter, StemRecord};
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one stem per line
    Text,
    /// JSON array of word/stem records
    Json,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub const ALL: [(OutputFormat, &'static str); 2] = [
        (OutputFormat::Text, "One stem per line (word<TAB>stem with --with-input)"),
        (OutputFormat::Json, "JSON array of {\"word\", \"stem\"} records"),
    ];

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    with_input: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, with_input)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
