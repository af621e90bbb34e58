//! Mutable word buffer the rewrite steps operate on

use smallvec::SmallVec;
use std::fmt::{self, Write};

use super::classifier::{mark_in_place, restore_in_place};

/// Words up to this many letters never touch the heap
const INLINE_CAPACITY: usize = 24;

/// Owned character buffer for one stemming invocation
///
/// Suffix arguments are ASCII literals, so their byte length equals their
/// character count. All offsets are character offsets and every accessor is
/// bounds-checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBuffer {
    chars: SmallVec<[char; INLINE_CAPACITY]>,
}

impl WordBuffer {
    /// Create a buffer holding `word`
    pub fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
        }
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters as a slice
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Last character
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Check for an ASCII suffix
    pub fn ends_with(&self, suffix: &str) -> bool {
        debug_assert!(suffix.is_ascii());
        let n = suffix.len();
        n <= self.chars.len()
            && self.chars[self.chars.len() - n..]
                .iter()
                .copied()
                .eq(suffix.chars())
    }

    /// Check for an ASCII prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        starts_with(&self.chars, prefix)
    }

    /// Whether the buffer spells exactly `word`
    pub fn is(&self, word: &str) -> bool {
        self.chars.iter().copied().eq(word.chars())
    }

    /// Offset at which a suffix of `suffix_len` characters starts
    pub fn boundary(&self, suffix_len: usize) -> usize {
        self.chars.len().saturating_sub(suffix_len)
    }

    /// Everything before the last `suffix_len` characters
    pub fn stem_before(&self, suffix_len: usize) -> &[char] {
        &self.chars[..self.boundary(suffix_len)]
    }

    /// Character immediately before the last `suffix_len` characters
    pub fn char_before(&self, suffix_len: usize) -> Option<char> {
        if suffix_len >= self.chars.len() {
            return None;
        }
        self.chars.get(self.chars.len() - suffix_len - 1).copied()
    }

    /// Drop the last `count` characters
    pub fn truncate_by(&mut self, count: usize) {
        let len = self.boundary(count);
        self.chars.truncate(len);
    }

    /// Append a character
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Replace the last `suffix_len` characters with `replacement`
    pub fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        self.truncate_by(suffix_len);
        self.chars.extend(replacement.chars());
    }

    /// Overwrite the last character
    pub fn set_last(&mut self, ch: char) {
        if let Some(last) = self.chars.last_mut() {
            *last = ch;
        }
    }

    /// Rewrite consonant-acting "y" letters to the marker
    pub fn mark_consonant_y(&mut self) {
        mark_in_place(&mut self.chars);
    }

    /// Turn markers back into lowercase "y"
    pub fn restore_y(&mut self) {
        restore_in_place(&mut self.chars);
    }
}

impl From<&str> for WordBuffer {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl fmt::Display for WordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

/// Check a character slice for an ASCII prefix
pub(crate) fn starts_with(chars: &[char], prefix: &str) -> bool {
    let n = prefix.len();
    n <= chars.len() && chars[..n].iter().copied().eq(prefix.chars())
}
