//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use porter2_core::CacheStats;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs stems as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<StemRecord>,
    stats: Option<CacheStats>,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRecord {
    /// The input token
    pub word: String,
    /// Its stem
    pub stem: String,
}

/// Records plus cache statistics, written when stats are requested
#[derive(Serialize)]
struct Report<'a> {
    results: &'a [StemRecord],
    stats: &'a CacheStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
            stats: None,
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()> {
        self.records.push(StemRecord {
            word: word.to_string(),
            stem: stem.to_string(),
        });
        Ok(())
    }

    fn format_stats(&mut self, stats: &CacheStats) -> Result<()> {
        self.stats = Some(*stats);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match &self.stats {
            Some(stats) => {
                let report = Report {
                    results: &self.records,
                    stats,
                };
                serde_json::to_writer_pretty(&mut self.writer, &report)?;
            }
            None => serde_json::to_writer_pretty(&mut self.writer, &self.records)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
