//! Porter2 (Snowball English) stemming engine
//!
//! This crate reduces a single English word to its stem by running the
//! Porter2 rewrite steps over an owned character buffer. Region boundaries
//! (R1/R2) are computed once per word, the lexical exception tables are
//! consulted before and after step 1a, and results are memoized per
//! [`Stemmer`] instance.
//!
//! # Architecture
//!
//! - **Domain layer**: letter classification, regions, measure and the word buffer
//! - **Tables**: exception tables and the ordered suffix rules for steps 2-4
//! - **Application layer**: the step pipeline and the memo tables
//! - **API layer**: the [`Stemmer`] facade and its configuration
//!
//! # Example
//!
//! ```rust
//! use porter2_core::Stemmer;
//!
//! let stemmer = Stemmer::new();
//! assert_eq!(stemmer.stem("generously"), "generous");
//! assert_eq!(stemmer.stem("knightly"), "knight");
//!
//! // Shared default stemmer
//! assert_eq!(porter2_core::stem("consolingly"), "consol");
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod tables;

use std::sync::OnceLock;

pub use api::{Stemmer, StemmerBuilder, StemmerConfig, StemmerConfigBuilder};
pub use application::{CacheStats, MemoStats};
pub use domain::classifier::{classify, is_vowel, mark_consonant_y, LetterClass, Y_MARKER};
pub use domain::measure::{
    ends_with_double_consonant, ends_with_short_syllable, is_short, letter_type_run, measure,
};
pub use domain::region::{Region, Regions};
pub use domain::word::WordBuffer;
pub use error::{Error, Result};
pub use tables::{ExceptionTables, ExceptionTablesBuilder};

/// Process-wide stemmer behind [`stem`]
static DEFAULT_STEMMER: OnceLock<Stemmer> = OnceLock::new();

/// Stem a word with the shared default stemmer
///
/// The stemmer is built with the English exception tables on first use and
/// its caches live for the rest of the process.
pub fn stem(word: &str) -> String {
    DEFAULT_STEMMER.get_or_init(Stemmer::new).stem(word)
}
