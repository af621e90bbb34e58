//! Memoizing stemmer facade

use crate::api::StemmerConfig;
use crate::application::pipeline::step_0;
use crate::application::{CacheStats, Evaluator, Memo, Pipeline};
use crate::domain::word::WordBuffer;
use crate::tables::ExceptionTables;

/// Porter2 stemmer with its own exception tables and caches
///
/// `stem` takes `&self`; every cache sits behind a lock, so one stemmer can
/// serve many threads.
///
/// ```
/// use porter2_core::Stemmer;
///
/// let stemmer = Stemmer::new();
/// assert_eq!(stemmer.stem("skis"), "ski");
/// assert_eq!(stemmer.stem("inning"), "inning");
/// assert_eq!(stemmer.stem("'s"), "");
/// ```
#[derive(Debug)]
pub struct Stemmer {
    tables: ExceptionTables,
    config: StemmerConfig,
    stems: Memo,
    letter_runs: Memo,
    marked: Memo,
}

impl Stemmer {
    /// Create a stemmer with the English tables and default caching
    pub fn new() -> Self {
        Self::with_config(StemmerConfig::default())
    }

    /// Create a stemmer with the English tables and custom caching
    pub fn with_config(config: StemmerConfig) -> Self {
        Self::from_parts(ExceptionTables::english(), config)
    }

    /// Create a stemmer builder
    pub fn builder() -> StemmerBuilder {
        StemmerBuilder::default()
    }

    fn from_parts(tables: ExceptionTables, config: StemmerConfig) -> Self {
        log::debug!(
            "creating stemmer: cache_stems={}, cache_helpers={}, initial_capacity={}",
            config.cache_stems,
            config.cache_helpers,
            config.initial_capacity
        );

        Self {
            tables,
            stems: Memo::with_capacity("stem", config.initial_capacity),
            letter_runs: Memo::new("letter run"),
            marked: Memo::new("marked form"),
            config,
        }
    }

    /// Stem a single word
    ///
    /// Words of at most two characters come back unchanged unless they are
    /// nothing but a possessive ending, which stems to `""`.
    pub fn stem(&self, input: &str) -> String {
        if input.chars().count() <= 2 {
            return stem_short(input);
        }

        let word = input.strip_prefix('\'').unwrap_or(input);
        if let Some(stem) = self.tables.lookup(word) {
            return stem.to_string();
        }

        if !self.config.cache_stems {
            return self.pipeline().run(word);
        }
        if let Some(stem) = self.stems.get(input) {
            return stem;
        }

        let stem = self.pipeline().run(word);
        self.stems.insert(input.to_string(), stem)
    }

    fn pipeline(&self) -> Pipeline<'_> {
        let helpers = self.config.cache_helpers;
        Pipeline::new(
            &self.tables,
            Evaluator::new(helpers.then_some(&self.letter_runs)),
            helpers.then_some(&self.marked),
        )
    }

    /// Exception tables in use
    pub fn exceptions(&self) -> &ExceptionTables {
        &self.tables
    }

    /// Get the current configuration
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Snapshot of every cache's counters
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            stems: self.stems.stats(),
            letter_runs: self.letter_runs.stats(),
            marked_forms: self.marked.stats(),
        }
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

fn stem_short(word: &str) -> String {
    let mut buffer = WordBuffer::new(word);
    step_0(&mut buffer);
    if buffer.is_empty() {
        String::new()
    } else {
        word.to_string()
    }
}

/// Builder composing custom exception tables and configuration
#[derive(Debug, Default)]
pub struct StemmerBuilder {
    tables: Option<ExceptionTables>,
    config: Option<StemmerConfig>,
}

impl StemmerBuilder {
    /// Use these exception tables instead of the English ones
    pub fn exceptions(mut self, tables: ExceptionTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Use this caching configuration
    pub fn config(mut self, config: StemmerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the stemmer
    pub fn build(self) -> Stemmer {
        Stemmer::from_parts(
            self.tables.unwrap_or_default(),
            self.config.unwrap_or_default(),
        )
    }
}
