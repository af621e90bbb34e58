//! Measure and syllable shape of a word
//!
//! Every predicate comes in two forms: a `&str` version for callers and a
//! `&[char]` version the pipeline uses on its buffer.

use super::classifier::{classify, is_vowel, Y_MARKER};

/// Doubled consonants that step 1b undoubles
pub const DOUBLE_CONSONANTS: [&str; 9] = ["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

/// Collapse a word into alternating `V`/`C` symbols
///
/// ```
/// use porter2_core::letter_type_run;
///
/// assert_eq!(letter_type_run("hat"), "CVC");
/// assert_eq!(letter_type_run("between"), "CVCVC");
/// ```
pub fn letter_type_run(word: &str) -> String {
    run_of(word.chars())
}

/// Letter-type run of a character slice
pub fn letter_type_run_of(word: &[char]) -> String {
    run_of(word.iter().copied())
}

fn run_of(chars: impl Iterator<Item = char>) -> String {
    let mut run = String::new();
    let mut previous = None;
    for class in chars.map(classify) {
        if previous != Some(class) {
            run.push(class.symbol());
            previous = Some(class);
        }
    }
    run
}

/// Number of complete vowel-consonant pairs in a letter-type run
pub fn measure_of_run(run: &str) -> usize {
    if run.len() <= 1 {
        return 0;
    }
    if run.starts_with('C') {
        (run.len() - 1) / 2
    } else {
        run.len() / 2
    }
}

/// Porter measure `m` of a word
///
/// ```
/// use porter2_core::measure;
///
/// assert_eq!(measure("a"), 0);
/// assert_eq!(measure("at"), 1);
/// assert_eq!(measure("between"), 2);
/// ```
pub fn measure(word: &str) -> usize {
    measure_of_run(&letter_type_run(word))
}

/// Whether a word ends with a short syllable
///
/// Either the whole word is vowel-consonant, or it ends consonant, vowel,
/// consonant where the last consonant is not `w`, `x` or the y-marker.
pub fn ends_with_short_syllable(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    ends_with_short_syllable_of(&chars)
}

/// Short-syllable check on a character slice
pub fn ends_with_short_syllable_of(word: &[char]) -> bool {
    match *word {
        [] | [_] => false,
        [first, second] => is_vowel(first) && !is_vowel(second),
        [.., third, second, last] => {
            if matches!(last, 'w' | 'x' | Y_MARKER) {
                return false;
            }
            !is_vowel(third) && is_vowel(second) && !is_vowel(last)
        }
    }
}

/// Whether a word is short: a final short syllable and measure 1
///
/// ```
/// use porter2_core::is_short;
///
/// assert!(is_short("hat"));
/// assert!(!is_short("saw"));
/// ```
pub fn is_short(word: &str) -> bool {
    ends_with_short_syllable(word) && measure(word) == 1
}

/// Whether a word ends with a doubled consonant, ignoring case
pub fn ends_with_double_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    ends_with_double_consonant_of(&chars)
}

/// Double-consonant check on a character slice
pub fn ends_with_double_consonant_of(word: &[char]) -> bool {
    let [.., a, b] = *word else {
        return false;
    };
    let (a, b) = (a.to_ascii_lowercase(), b.to_ascii_lowercase());
    DOUBLE_CONSONANTS.iter().any(|pair| {
        let mut letters = pair.chars();
        letters.next() == Some(a) && letters.next() == Some(b)
    })
}
