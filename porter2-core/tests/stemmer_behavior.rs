//! End-to-end behaviour of the public API

use porter2_core::{
    ends_with_double_consonant, is_short, mark_consonant_y, measure, stem, Regions, Stemmer,
};

#[test]
fn test_exceptions() {
    assert_eq!(stem("skis"), "ski");
    assert_eq!(stem("sky"), "sky");
    assert_eq!(stem("news"), "news");
    assert_eq!(stem("gently"), "gentl");
    assert_eq!(stem("atlas"), "atlas");
}

#[test]
fn test_post_step_1a() {
    assert_eq!(stem("inning"), "inning");
    assert_eq!(stem("outing"), "outing");
    assert_eq!(stem("herrings"), "herring");
    assert_eq!(stem("earrings"), "earring");
    assert_eq!(stem("exceeded"), "exceed");
    assert_eq!(stem("proceeding"), "proceed");
}

#[test]
fn test_possessive_only_tokens() {
    assert_eq!(stem("'s"), "");
    assert_eq!(stem("''s"), "");
    assert_eq!(stem("''s'"), "");
    assert_eq!(stem("dog's"), "dog");
}

#[test]
fn test_regions() {
    assert_eq!(Regions::of("generate").r1, 5);
    assert_eq!(Regions::of("communication").r1, 6);
    assert_eq!(stem("generate"), "generat");
    assert_eq!(stem("communication"), "communic");
    assert_eq!(stem("arsenal"), "arsenal");
}

#[test]
fn test_step_ordering() {
    assert_eq!(stem("conformabli"), "conform");
    assert_eq!(stem("relational"), "relat");
    assert_eq!(stem("traditional"), "tradit");
    assert_eq!(stem("electrical"), "electr");
    assert_eq!(stem("formality"), "formal");
    assert_eq!(stem("dependent"), "depend");
    assert_eq!(stem("irritant"), "irrit");
    assert_eq!(stem("communism"), "communism");
}

#[test]
fn test_step_1() {
    assert_eq!(stem("caresses"), "caress");
    assert_eq!(stem("ponies"), "poni");
    assert_eq!(stem("ties"), "tie");
    assert_eq!(stem("gases"), "gase");
    assert_eq!(stem("hopping"), "hop");
    assert_eq!(stem("hoping"), "hope");
    assert_eq!(stem("filing"), "file");
    assert_eq!(stem("fizzed"), "fizz");
    assert_eq!(stem("agreed"), "agre");
    assert_eq!(stem("fly"), "fli");
}

#[test]
fn test_consonant_y() {
    assert_eq!(mark_consonant_y("enjoyed"), "enjoYed");
    assert_eq!(stem("boys"), "boy");
    assert_eq!(stem("obeyed"), "obey");
    assert_eq!(stem("destroying"), "destroy");
    assert_eq!(stem("yelled"), "yell");
    assert_eq!(stem("ayyy"), "ayyy");
}

#[test]
fn test_step_2_and_3() {
    assert_eq!(stem("archaeology"), "archaeolog");
    assert_eq!(stem("analogies"), "analog");
    assert_eq!(stem("sensibly"), "sensibl");
    assert_eq!(stem("cheerfully"), "cheer");
    assert_eq!(stem("hopelessly"), "hopeless");
    assert_eq!(stem("usually"), "usual");
    assert_eq!(stem("fully"), "fulli");
}

#[test]
fn test_helpers() {
    assert_eq!(measure("a"), 0);
    assert_eq!(measure("at"), 1);
    assert_eq!(measure("between"), 2);
    assert_eq!(measure("be"), 0);
    assert_eq!(measure("been"), 1);
    assert!(is_short("hat"));
    assert!(!is_short("saw"));
    assert!(ends_with_double_consonant("hopp"));
}

#[test]
fn test_non_ascii_does_not_panic() {
    let stemmer = Stemmer::new();
    assert_eq!(stemmer.stem("café"), "café");
    let _ = stemmer.stem("naïvetés");
    let _ = stemmer.stem("日本語");
    let _ = stemmer.stem("'é's");
}
