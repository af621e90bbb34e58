//! Lexical exception tables
//!
//! Two tables override the rewrite steps: a direct word → stem map checked
//! before anything else runs, and a set of words that stop the pipeline
//! when they appear right after step 1a.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Words whose stem is fixed outright
const ENGLISH_FORMS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
    ("communing", "commune"),
];

/// Words left alone once step 1a has produced them
const ENGLISH_POST_STEP_1A: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Read-only exception tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionTables {
    forms: HashMap<String, String>,
    post_step_1a: HashSet<String>,
}

impl ExceptionTables {
    /// The canonical English tables
    pub fn english() -> Self {
        Self {
            forms: ENGLISH_FORMS
                .iter()
                .map(|&(word, stem)| (word.to_string(), stem.to_string()))
                .collect(),
            post_step_1a: ENGLISH_POST_STEP_1A
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }

    /// Start a builder with empty tables
    pub fn builder() -> ExceptionTablesBuilder {
        ExceptionTablesBuilder::new()
    }

    /// Fixed stem for a word, if it has one
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.forms.get(word).map(String::as_str)
    }

    /// Whether the pipeline stops when step 1a yields `word`
    pub fn stops_after_step_1a(&self, word: &str) -> bool {
        self.post_step_1a.contains(word)
    }

    /// All fixed forms, sorted by word
    pub fn forms(&self) -> Vec<(&str, &str)> {
        let mut forms: Vec<(&str, &str)> = self
            .forms
            .iter()
            .map(|(word, stem)| (word.as_str(), stem.as_str()))
            .collect();
        forms.sort_unstable();
        forms
    }

    /// All post-step-1a words, sorted
    pub fn post_step_1a_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.post_step_1a.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for ExceptionTables {
    fn default() -> Self {
        Self::english()
    }
}

/// Fluent builder for custom exception tables
#[derive(Debug, Clone, Default)]
pub struct ExceptionTablesBuilder {
    forms: Vec<(String, String)>,
    post_step_1a: Vec<String>,
}

impl ExceptionTablesBuilder {
    /// Create a builder with no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with the English tables
    pub fn english() -> Self {
        Self {
            forms: ENGLISH_FORMS
                .iter()
                .map(|&(word, stem)| (word.to_string(), stem.to_string()))
                .collect(),
            post_step_1a: ENGLISH_POST_STEP_1A
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }

    /// Fix the stem of a word
    pub fn form(mut self, word: impl Into<String>, stem: impl Into<String>) -> Self {
        self.forms.push((word.into(), stem.into()));
        self
    }

    /// Stop the pipeline when step 1a yields `word`
    pub fn stop_after_step_1a(mut self, word: impl Into<String>) -> Self {
        self.post_step_1a.push(word.into());
        self
    }

    /// Validate the entries and build the tables
    pub fn build(self) -> Result<ExceptionTables> {
        let mut forms = HashMap::with_capacity(self.forms.len());
        for (word, stem) in self.forms {
            validate_key(&word)?;
            if stem.is_empty() {
                return Err(Error::InvalidException {
                    word,
                    reason: "stem must not be empty".to_string(),
                });
            }

            match forms.entry(word) {
                Entry::Vacant(slot) => {
                    slot.insert(stem);
                }
                Entry::Occupied(slot) if *slot.get() != stem => {
                    return Err(Error::ConflictingException {
                        word: slot.key().clone(),
                        first: slot.get().clone(),
                        second: stem,
                    });
                }
                Entry::Occupied(_) => {}
            }
        }

        let mut post_step_1a = HashSet::with_capacity(self.post_step_1a.len());
        for word in self.post_step_1a {
            validate_key(&word)?;
            post_step_1a.insert(word);
        }

        log::debug!(
            "built exception tables: {} fixed forms, {} post-step-1a words",
            forms.len(),
            post_step_1a.len()
        );

        Ok(ExceptionTables {
            forms,
            post_step_1a,
        })
    }
}

fn validate_key(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::InvalidException {
            word: word.to_string(),
            reason: "word must not be empty".to_string(),
        });
    }
    if word.chars().any(char::is_uppercase) {
        return Err(Error::InvalidException {
            word: word.to_string(),
            reason: "words must be lowercase".to_string(),
        });
    }
    Ok(())
}
