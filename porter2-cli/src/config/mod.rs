//! Configuration module
//!
//! An optional TOML file supplies defaults; explicit command-line flags
//! always win over it.

use anyhow::{Context, Result};
use porter2_core::StemmerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::input::read_text;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Lowercase tokens and strip everything but letters and apostrophes
    pub normalize: bool,

    /// Number of worker threads for parallel runs (unset = all cores)
    pub threads: Option<usize>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Print each input word next to its stem
    pub with_input: bool,
}

/// Stemmer cache configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Memoize word → stem results
    pub stems: bool,

    /// Memoize letter runs and marked forms
    pub helpers: bool,

    /// Stems to reserve room for up front
    pub initial_capacity: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stems: true,
            helpers: true,
            initial_capacity: None,
        }
    }
}

impl CacheConfig {
    /// Build the core stemmer configuration
    pub fn stemmer_config(&self) -> Result<StemmerConfig, CliError> {
        let mut builder = StemmerConfig::builder()
            .cache_stems(self.stems)
            .cache_helpers(self.helpers);
        if let Some(entries) = self.initial_capacity {
            builder = builder.initial_capacity(entries);
        }
        Ok(builder.build()?)
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.processing.threads == Some(0) {
            return Err(CliError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }
        self.cache.stemmer_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.cache.stems);
        assert_eq!(config.output.format, None);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::parse(
            r#"
[processing]
normalize = true
threads = 4

[output]
format = "json"
with_input = true

[cache]
helpers = false
initial_capacity = 128
"#,
        )
        .unwrap();

        assert!(config.processing.normalize);
        assert_eq!(config.processing.threads, Some(4));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.with_input);

        let stemmer_config = config.cache.stemmer_config().unwrap();
        assert!(stemmer_config.cache_stems());
        assert!(!stemmer_config.cache_helpers());
        assert_eq!(stemmer_config.initial_capacity(), 128);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = CliConfig::parse("[output]\nformat = \"markdown\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::parse("[processing]\nlanguage = \"en\"\n").is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = CliConfig::parse("[processing]\nthreads = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: threads must be greater than 0"
        );
    }

    #[test]
    fn test_invalid_cache_rejected() {
        let err =
            CliConfig::parse("[cache]\nstems = false\ninitial_capacity = 10\n").unwrap_err();
        assert!(err.to_string().contains("initial_capacity requires cache_stems"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("porter2.toml");
        fs::write(&path, "[output]\nformat = \"text\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Text));

        assert!(CliConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
