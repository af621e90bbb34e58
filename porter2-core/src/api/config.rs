//! Stemmer configuration

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Stems the cache reserves room for up front
    pub const INITIAL_CAPACITY: usize = 1024;

    /// Largest reservation `initial_capacity` may request; the cache itself is unbounded
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;
}

/// Caching behaviour of a [`Stemmer`](crate::Stemmer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmerConfig {
    pub(crate) cache_stems: bool,
    pub(crate) cache_helpers: bool,
    pub(crate) initial_capacity: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            cache_stems: true,
            cache_helpers: true,
            initial_capacity: defaults::INITIAL_CAPACITY,
        }
    }
}

impl StemmerConfig {
    /// Create a configuration builder
    pub fn builder() -> StemmerConfigBuilder {
        StemmerConfigBuilder::default()
    }

    /// Configuration with every cache disabled
    pub fn uncached() -> Self {
        Self {
            cache_stems: false,
            cache_helpers: false,
            initial_capacity: 0,
        }
    }

    /// Whether word → stem results are memoized
    pub fn cache_stems(&self) -> bool {
        self.cache_stems
    }

    /// Whether letter runs and marked forms are memoized
    pub fn cache_helpers(&self) -> bool {
        self.cache_helpers
    }

    /// Stems the cache reserves room for up front
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.initial_capacity > defaults::MAX_INITIAL_CAPACITY {
            return Err(Error::Configuration(format!(
                "initial_capacity must be at most {}",
                defaults::MAX_INITIAL_CAPACITY
            )));
        }

        Ok(())
    }
}

/// Fluent builder for stemmer configuration
#[derive(Debug, Default)]
pub struct StemmerConfigBuilder {
    cache_stems: Option<bool>,
    cache_helpers: Option<bool>,
    initial_capacity: Option<usize>,
}

impl StemmerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the stem cache
    pub fn cache_stems(mut self, enabled: bool) -> Self {
        self.cache_stems = Some(enabled);
        self
    }

    /// Enable or disable the helper caches
    pub fn cache_helpers(mut self, enabled: bool) -> Self {
        self.cache_helpers = Some(enabled);
        self
    }

    /// Reserve room for this many stems up front
    pub fn initial_capacity(mut self, entries: usize) -> Self {
        self.initial_capacity = Some(entries);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StemmerConfig> {
        let mut config = StemmerConfig::default();

        if let Some(enabled) = self.cache_stems {
            config.cache_stems = enabled;
        }

        if let Some(enabled) = self.cache_helpers {
            config.cache_helpers = enabled;
        }

        match self.initial_capacity {
            Some(entries) if entries > 0 && !config.cache_stems => {
                return Err(Error::Configuration(
                    "initial_capacity requires cache_stems".into(),
                ));
            }
            Some(entries) => config.initial_capacity = entries,
            None if !config.cache_stems => config.initial_capacity = 0,
            None => {}
        }

        config.validate()?;
        Ok(config)
    }
}
