//! Domain layer: pure letter-level analysis of a word
//!
//! Nothing in this layer holds state; memoization lives in the
//! application layer.

pub mod classifier;
pub mod measure;
pub mod region;
pub mod word;

pub use classifier::{classify, is_vowel, mark_consonant_y, LetterClass, Y_MARKER};
pub use measure::{
    ends_with_double_consonant, ends_with_short_syllable, is_short, letter_type_run, measure,
};
pub use region::{Region, Regions};
pub use word::WordBuffer;
