//! The Porter2 rewrite steps
//!
//! A [`Pipeline`] runs steps 0 to 5 over one word. Regions are computed
//! from the marked word before step 0 and reused unchanged by every later
//! step, so suffix offsets are compared against the original boundaries
//! even after the buffer has shrunk or grown.

use super::evaluator::Evaluator;
use super::memo::Memo;
use crate::domain::classifier::{is_vowel, mark_consonant_y, Y_MARKER};
use crate::domain::measure::{ends_with_double_consonant_of, ends_with_short_syllable_of};
use crate::domain::region::{Region, Regions};
use crate::domain::word::WordBuffer;
use crate::tables::exceptions::ExceptionTables;
use crate::tables::suffixes::{
    SuffixRule, LENGTHENED_ENDINGS, STEP_1B_SUFFIXES, STEP_2, STEP_3, STEP_4,
};

/// Possessive endings removed by step 0, longest first
const POSSESSIVES: [&str; 3] = ["'s'", "'s", "'"];

/// One configured run of the rewrite steps
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<'a> {
    tables: &'a ExceptionTables,
    evaluator: Evaluator<'a>,
    marked: Option<&'a Memo>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over the given tables and caches
    pub fn new(
        tables: &'a ExceptionTables,
        evaluator: Evaluator<'a>,
        marked: Option<&'a Memo>,
    ) -> Self {
        Self {
            tables,
            evaluator,
            marked,
        }
    }

    /// Create a pipeline that caches nothing
    pub fn uncached(tables: &'a ExceptionTables) -> Self {
        Self::new(tables, Evaluator::uncached(), None)
    }

    /// Run every step over `word` and return the stem
    ///
    /// The exception map and the length gate are the caller's concern; this
    /// only consults the post-step-1a set.
    pub fn run(&self, word: &str) -> String {
        let mut buffer = self.prepare(word);
        let regions = Regions::compute(buffer.as_slice());
        log::trace!(
            "stemming {word:?}: marked {buffer}, r1={}, r2={}",
            regions.r1,
            regions.r2
        );

        step_0(&mut buffer);
        if buffer.is_empty() {
            return String::new();
        }

        step_1a(&mut buffer);
        log::trace!("after step 1a: {buffer}");
        if self.tables.stops_after_step_1a(&buffer.to_string()) {
            buffer.restore_y();
            return buffer.to_string();
        }

        self.step_1b(&mut buffer, regions);
        step_1c(&mut buffer);
        log::trace!("after step 1: {buffer}");

        self.apply_rules(&mut buffer, regions, STEP_2);
        strip_ative(&mut buffer, regions);
        self.apply_rules(&mut buffer, regions, STEP_3);
        self.apply_rules(&mut buffer, regions, STEP_4);
        log::trace!("after step 4: {buffer}");

        step_5(&mut buffer, regions);
        buffer.restore_y();
        buffer.to_string()
    }

    fn prepare(&self, word: &str) -> WordBuffer {
        match self.marked {
            Some(memo) => {
                let marked = memo.get_or_insert_with(word, || mark_consonant_y(word));
                WordBuffer::new(&marked)
            }
            None => {
                let mut buffer = WordBuffer::new(word);
                buffer.mark_consonant_y();
                buffer
            }
        }
    }

    /// Step 1b: "eed"/"eedly" inside R1, then the first vowel-bearing
    /// "ed", "edly", "ing" or "ingly"
    fn step_1b(&self, word: &mut WordBuffer, regions: Regions) {
        if word.ends_with("eedly") {
            if regions.contains(Region::R1, word.boundary(5)) {
                word.truncate_by(3);
            }
            return;
        }
        if word.ends_with("eed") {
            if regions.contains(Region::R1, word.boundary(3)) {
                word.truncate_by(1);
            }
            return;
        }

        let stripped = STEP_1B_SUFFIXES.iter().find(|suffix| {
            word.ends_with(suffix) && self.evaluator.has_vowel(word.stem_before(suffix.len()))
        });
        let Some(suffix) = stripped else {
            return;
        };

        word.truncate_by(suffix.len());
        if LENGTHENED_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            word.push('e');
        } else if ends_with_double_consonant_of(word.as_slice()) {
            word.truncate_by(1);
        } else if self.evaluator.is_short(word.as_slice()) {
            word.push('e');
        }
    }

    /// Apply the first rule of `rules` whose suffix matches
    fn apply_rules(&self, word: &mut WordBuffer, regions: Regions, rules: &[SuffixRule]) {
        let Some(rule) = rules.iter().find(|rule| word.ends_with(rule.suffix)) else {
            return;
        };

        let len = rule.len();
        if !regions.contains(rule.region, word.boundary(len))
            || !rule.guard.admits(word.char_before(len))
        {
            return;
        }
        let below_measure = rule.min_measure > 0
            && self.evaluator.measure(word.stem_before(len)) < rule.min_measure;
        if below_measure {
            return;
        }

        word.replace_suffix(len, rule.replacement);
    }
}

/// Step 0: strip one possessive ending
pub(crate) fn step_0(word: &mut WordBuffer) {
    if let Some(suffix) = POSSESSIVES.iter().find(|suffix| word.ends_with(suffix)) {
        word.truncate_by(suffix.len());
    }
}

/// Step 1a: plural endings
fn step_1a(word: &mut WordBuffer) {
    if word.ends_with("sses") {
        word.truncate_by(2);
    } else if word.ends_with("ies") || word.ends_with("ied") {
        let drop = if word.len() >= 5 { 2 } else { 1 };
        word.truncate_by(drop);
    } else if word.ends_with("ss") || word.ends_with("us") {
        // kept as is
    } else if word.ends_with("s") && word.stem_before(2).iter().any(|&ch| is_vowel(ch)) {
        word.truncate_by(1);
    }
}

/// Step 1c: final "y" after a consonant becomes "i"
fn step_1c(word: &mut WordBuffer) {
    if word.len() < 3 || !matches!(word.last(), Some('y' | Y_MARKER)) {
        return;
    }
    if word.char_before(1).is_some_and(|ch| !is_vowel(ch)) {
        word.set_last('i');
    }
}

/// Start of step 3: "ative" inside R2 goes before the table is consulted
fn strip_ative(word: &mut WordBuffer, regions: Regions) {
    if word.ends_with("ative") && regions.contains(Region::R2, word.boundary(5)) {
        word.truncate_by(5);
    }
}

/// Step 5: final "e" and "ll"
fn step_5(word: &mut WordBuffer, regions: Regions) {
    let boundary = word.boundary(1);
    if word.last() == Some('e') {
        if regions.contains(Region::R2, boundary)
            || (regions.contains(Region::R1, boundary)
                && !ends_with_short_syllable_of(word.stem_before(1)))
        {
            word.truncate_by(1);
        }
    } else if word.ends_with("ll") && regions.contains(Region::R2, boundary) {
        word.truncate_by(1);
    }
}
