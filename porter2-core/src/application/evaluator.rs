//! Measure evaluation with optional letter-run memoization

use super::memo::Memo;
use crate::domain::measure::{ends_with_short_syllable_of, letter_type_run_of, measure_of_run};

/// Measure predicates over character slices
///
/// When a memo is attached, letter-type runs are cached by the exact
/// spelling of the slice, marker included.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator<'a> {
    runs: Option<&'a Memo>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator backed by an optional run cache
    pub fn new(runs: Option<&'a Memo>) -> Self {
        Self { runs }
    }

    /// Create an evaluator that always recomputes
    pub fn uncached() -> Self {
        Self { runs: None }
    }

    /// Letter-type run of a slice
    pub fn letter_types(&self, word: &[char]) -> String {
        match self.runs {
            Some(memo) => {
                let key: String = word.iter().collect();
                memo.get_or_insert_with(&key, || letter_type_run_of(word))
            }
            None => letter_type_run_of(word),
        }
    }

    /// Porter measure of a slice
    pub fn measure(&self, word: &[char]) -> usize {
        measure_of_run(&self.letter_types(word))
    }

    /// Whether any letter of the slice is a vowel
    pub fn has_vowel(&self, word: &[char]) -> bool {
        self.letter_types(word).contains('V')
    }

    /// Short word: a final short syllable and measure 1
    pub fn is_short(&self, word: &[char]) -> bool {
        ends_with_short_syllable_of(word) && self.measure(word) == 1
    }
}
