//! List command implementation

use anyhow::Result;
use porter2_core::ExceptionTables;
use std::io::{self, Write};

use super::ListCommands;
use crate::output::OutputFormat;

/// Execute the list command against stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(subcommand, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the requested listing
pub fn write_list<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Exceptions => {
            let tables = ExceptionTables::english();

            writeln!(out, "Exception forms:")?;
            for (word, stem) in tables.forms() {
                writeln!(out, "  {word:<12}=> {stem}")?;
            }

            writeln!(out)?;
            writeln!(out, "Kept after step 1a:")?;
            for word in tables.post_step_1a_words() {
                writeln!(out, "  {word}")?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for (format, description) in OutputFormat::ALL {
                writeln!(out, "  {:<6}{description}", format.name())?;
            }
        }
    }
    Ok(())
}
