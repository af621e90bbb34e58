//! Ordered suffix rules for steps 1b to 4
//!
//! Each table is scanned in declaration order and the first entry whose
//! suffix matches ends the step, whether or not its gates pass. Entries are
//! declared longest-first wherever one suffix ends another.

use crate::domain::region::Region;

/// Suffixes step 1b strips when the remaining stem holds a vowel
pub const STEP_1B_SUFFIXES: [&str; 4] = ["ed", "edly", "ing", "ingly"];

/// Endings that get an "e" appended after a step 1b strip
pub const LENGTHENED_ENDINGS: [&str; 3] = ["at", "bl", "iz"];

/// Letters allowed before a step 2 "li"
pub const LI_ENDINGS: &str = "cdeghkmnrt";

/// Constraint on the letter right before a matched suffix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// No constraint
    Always,
    /// The letter must be one of these
    PrecededBy(&'static str),
}

impl Guard {
    /// Whether the guard accepts the preceding letter
    pub fn admits(self, preceding: Option<char>) -> bool {
        match self {
            Guard::Always => true,
            Guard::PrecededBy(letters) => preceding.is_some_and(|ch| letters.contains(ch)),
        }
    }
}

/// One `(suffix, replacement, gates)` table entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix to match
    pub suffix: &'static str,
    /// Text replacing the suffix; empty deletes it
    pub replacement: &'static str,
    /// Region the suffix must start in
    pub region: Region,
    /// Constraint on the preceding letter
    pub guard: Guard,
    /// Smallest measure the remaining stem may have
    pub min_measure: usize,
}

impl SuffixRule {
    /// Replacement gated on R1 and a non-zero measure
    pub const fn r1(suffix: &'static str, replacement: &'static str) -> Self {
        Self {
            suffix,
            replacement,
            region: Region::R1,
            guard: Guard::Always,
            min_measure: 1,
        }
    }

    /// Deletion gated on R2 and a measure above one
    pub const fn r2(suffix: &'static str) -> Self {
        Self {
            suffix,
            replacement: "",
            region: Region::R2,
            guard: Guard::Always,
            min_measure: 2,
        }
    }

    /// Require one of `letters` before the suffix
    pub const fn preceded_by(mut self, letters: &'static str) -> Self {
        self.guard = Guard::PrecededBy(letters);
        self
    }

    /// Drop the measure gate and keep only the region check
    pub const fn region_only(mut self) -> Self {
        self.min_measure = 0;
        self
    }

    /// Number of characters the suffix spans
    pub fn len(&self) -> usize {
        self.suffix.len()
    }

    /// Whether the suffix is empty (never true for the built-in tables)
    pub fn is_empty(&self) -> bool {
        self.suffix.is_empty()
    }
}

/// Step 2 rules
pub static STEP_2: &[SuffixRule] = &[
    SuffixRule::r1("ational", "ate"),
    SuffixRule::r1("ization", "ize"),
    SuffixRule::r1("iveness", "ive"),
    SuffixRule::r1("fulness", "ful"),
    SuffixRule::r1("ousness", "ous"),
    SuffixRule::r1("tional", "tion"),
    SuffixRule::r1("biliti", "ble"),
    SuffixRule::r1("lessli", "less"),
    SuffixRule::r1("entli", "ent"),
    SuffixRule::r1("ation", "ate"),
    SuffixRule::r1("alism", "al"),
    SuffixRule::r1("aliti", "al"),
    SuffixRule::r1("ousli", "ous"),
    SuffixRule::r1("iviti", "ive"),
    SuffixRule::r1("fulli", "ful"),
    SuffixRule::r1("enci", "ence"),
    SuffixRule::r1("anci", "ance"),
    SuffixRule::r1("abli", "able"),
    SuffixRule::r1("izer", "ize"),
    SuffixRule::r1("ator", "ate"),
    SuffixRule::r1("alli", "al"),
    SuffixRule::r1("bli", "ble"),
    SuffixRule::r1("ogi", "og").preceded_by("l"),
    SuffixRule::r1("li", "").preceded_by(LI_ENDINGS),
];

/// Step 3 rules, consulted after a trailing "ative" in R2 is removed
pub static STEP_3: &[SuffixRule] = &[
    SuffixRule::r1("ational", "ate"),
    SuffixRule::r1("tional", "tion"),
    SuffixRule::r1("alize", "al"),
    SuffixRule::r1("icate", "ic"),
    SuffixRule::r1("iciti", "ic"),
    SuffixRule::r1("ical", "ic"),
    SuffixRule::r1("ness", ""),
    SuffixRule::r1("ful", ""),
];

/// Step 4 rules
pub static STEP_4: &[SuffixRule] = &[
    SuffixRule::r2("ement"),
    SuffixRule::r2("ance"),
    SuffixRule::r2("ence"),
    SuffixRule::r2("able"),
    SuffixRule::r2("ible"),
    SuffixRule::r2("ment"),
    SuffixRule::r2("ant"),
    SuffixRule::r2("ent"),
    SuffixRule::r2("ism"),
    SuffixRule::r2("ate"),
    SuffixRule::r2("iti"),
    SuffixRule::r2("ous"),
    SuffixRule::r2("ive"),
    SuffixRule::r2("ize"),
    SuffixRule::r2("ion").preceded_by("st").region_only(),
    SuffixRule::r2("al"),
    SuffixRule::r2("er"),
    SuffixRule::r2("ic"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn shadowed(table: &[SuffixRule]) -> Option<(&'static str, &'static str)> {
        for (i, earlier) in table.iter().enumerate() {
            for later in &table[i + 1..] {
                if later.suffix.ends_with(earlier.suffix) {
                    return Some((earlier.suffix, later.suffix));
                }
            }
        }
        None
    }

    #[test]
    fn test_no_rule_is_shadowed() {
        assert_eq!(shadowed(STEP_2), None);
        assert_eq!(shadowed(STEP_3), None);
        assert_eq!(shadowed(STEP_4), None);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(STEP_2.len(), 24);
        assert_eq!(STEP_3.len(), 8);
        assert_eq!(STEP_4.len(), 18);
        assert!(STEP_2.iter().chain(STEP_3).chain(STEP_4).all(|r| !r.is_empty()));
    }

    #[test]
    fn test_special_entries() {
        assert!(STEP_3.iter().all(|r| r.region == Region::R1 && r.min_measure == 1));
        assert!(!STEP_3.iter().any(|r| r.suffix == "ative"));

        let ion = STEP_4.iter().find(|r| r.suffix == "ion").unwrap();
        assert_eq!(ion.guard, Guard::PrecededBy("st"));
        assert_eq!(ion.min_measure, 0);

        let li = STEP_2.last().unwrap();
        assert_eq!(li.suffix, "li");
        assert_eq!(li.guard, Guard::PrecededBy(LI_ENDINGS));
    }

    #[test]
    fn test_guard() {
        assert!(Guard::Always.admits(None));
        assert!(Guard::PrecededBy("st").admits(Some('t')));
        assert!(!Guard::PrecededBy("st").admits(Some('n')));
        assert!(!Guard::PrecededBy("st").admits(None));
    }
}
