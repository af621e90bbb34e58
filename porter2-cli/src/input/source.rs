//! Where stemming input comes from

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::CliError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a UTF-8 file, dropping a leading byte order mark
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(strip_bom(content))
}

fn strip_bom(mut text: String) -> String {
    if text.starts_with(BYTE_ORDER_MARK) {
        text.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
    }
    text
}

/// A text stream of words to stem or vocabulary pairs to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl WordSource {
    /// Read the whole source as text
    pub fn read(&self) -> Result<String> {
        match self {
            WordSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(strip_bom(text))
            }
            WordSource::File(path) => read_text(path),
        }
    }
}

impl From<PathBuf> for WordSource {
    fn from(path: PathBuf) -> Self {
        WordSource::File(path)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Stdin => f.write_str("<stdin>"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
