//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use porter2_core::{CacheStats, MemoStats};
use std::io::Write;

/// Plain text formatter - outputs one stem per line
pub struct TextFormatter<W: Write> {
    writer: W,
    with_input: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, with_input: bool) -> Self {
        Self { writer, with_input }
    }

    fn write_memo(&mut self, name: &str, stats: &MemoStats) -> Result<()> {
        writeln!(
            self.writer,
            "# {name}: {} hits, {} misses, {} entries ({:.1}% hit ratio)",
            stats.hits,
            stats.misses,
            stats.entries,
            stats.hit_ratio() * 100.0
        )?;
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()> {
        if self.with_input {
            writeln!(self.writer, "{word}\t{stem}")?;
        } else {
            writeln!(self.writer, "{stem}")?;
        }
        Ok(())
    }

    fn format_stats(&mut self, stats: &CacheStats) -> Result<()> {
        self.write_memo("stem cache", &stats.stems)?;
        self.write_memo("letter-run cache", &stats.letter_runs)?;
        self.write_memo("marked-form cache", &stats.marked_forms)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
