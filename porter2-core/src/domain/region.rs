//! R1/R2 region boundaries
//!
//! R1 starts right after the first vowel run that follows the leading
//! consonants; R2 applies the same scan again from R1. Both are computed
//! once, before any rewrite, and steps compare suffix offsets against them
//! even after the buffer has changed length.

use super::classifier::is_vowel;
use super::word::starts_with;

/// Prefixes whose R1 is fixed regardless of their letters
const FIXED_R1_PREFIXES: &[(&str, usize)] = &[("gener", 5), ("arsen", 5), ("commun", 6)];

/// Which region a rule is gated on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// The first region
    R1,
    /// The nested, stricter region
    R2,
}

/// Start offsets of R1 and R2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regions {
    /// Start of R1
    pub r1: usize,
    /// Start of R2
    pub r2: usize,
}

impl Regions {
    /// Compute both regions of a (marked) word
    pub fn compute(word: &[char]) -> Self {
        let r1 = compute_r1(word);
        let r2 = compute_r2(word, r1);
        Self { r1, r2 }
    }

    /// Compute both regions of a string
    pub fn of(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        Self::compute(&chars)
    }

    /// Start offset of a region
    pub fn start(&self, region: Region) -> usize {
        match region {
            Region::R1 => self.r1,
            Region::R2 => self.r2,
        }
    }

    /// Whether a suffix starting at `boundary` lies inside `region`
    #[inline]
    pub fn contains(&self, region: Region, boundary: usize) -> bool {
        boundary >= self.start(region)
    }
}

/// Skip consonants from `start`, then skip the vowel run after them
///
/// Returns the offset just past that vowel run, or the word length when
/// the scan runs off the end.
pub fn index_of_vowel_after_consonant(word: &[char], start: usize) -> usize {
    let mut i = start;
    while i < word.len() && !is_vowel(word[i]) {
        i += 1;
    }
    while i < word.len() && is_vowel(word[i]) {
        i += 1;
    }
    i
}

/// Start of R1
pub fn compute_r1(word: &[char]) -> usize {
    FIXED_R1_PREFIXES
        .iter()
        .find(|(prefix, _)| starts_with(word, prefix))
        .map(|&(_, offset)| offset)
        .unwrap_or_else(|| index_of_vowel_after_consonant(word, 0))
}

/// Start of R2, given R1
pub fn compute_r2(word: &[char], r1: usize) -> usize {
    index_of_vowel_after_consonant(word, r1)
}
