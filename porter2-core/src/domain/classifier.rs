//! Vowel/consonant classification
//!
//! The vowels are exactly `a e i o u y`. A "y" that follows a vowel (or
//! starts the word) behaves as a consonant; such letters are rewritten to
//! [`Y_MARKER`] before the rewrite steps run and restored afterwards.

/// Stand-in for a "y" acting as a consonant
pub const Y_MARKER: char = 'Y';

/// Classification of a single letter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// One of `a e i o u y`
    Vowel,
    /// Anything else, including the consonant-y marker and apostrophes
    Consonant,
}

impl LetterClass {
    /// Symbol used in letter-type runs
    pub fn symbol(self) -> char {
        match self {
            LetterClass::Vowel => 'V',
            LetterClass::Consonant => 'C',
        }
    }
}

/// Classify a letter
#[inline]
pub fn classify(ch: char) -> LetterClass {
    match ch {
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' => LetterClass::Vowel,
        _ => LetterClass::Consonant,
    }
}

/// Check if a letter classifies as a vowel
#[inline]
pub fn is_vowel(ch: char) -> bool {
    classify(ch) == LetterClass::Vowel
}

/// Mark every consonant-acting "y" in a word
///
/// ```
/// use porter2_core::mark_consonant_y;
///
/// assert_eq!(mark_consonant_y("yes"), "Yes");
/// assert_eq!(mark_consonant_y("buy"), "buY");
/// assert_eq!(mark_consonant_y("fly"), "fly");
/// ```
pub fn mark_consonant_y(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    mark_in_place(&mut chars);
    chars.into_iter().collect()
}

/// Mark consonant-acting "y" letters in place
///
/// Each position is judged against its predecessor as already rewritten, so
/// a "y" following a freshly marked `Y` stays a vowel.
pub(crate) fn mark_in_place(chars: &mut [char]) {
    if let Some(first) = chars.first_mut() {
        if *first == 'y' {
            *first = Y_MARKER;
        }
    }

    for i in 1..chars.len() {
        if chars[i] == 'y' && is_vowel(chars[i - 1]) {
            chars[i] = Y_MARKER;
        }
    }
}

/// Turn every marker back into a lowercase "y"
pub(crate) fn restore_in_place(chars: &mut [char]) {
    for ch in chars.iter_mut().filter(|ch| **ch == Y_MARKER) {
        *ch = 'y';
    }
}
