//! Static tables driving the rewrite steps
//!
//! Lookups never allocate; the exception tables are built once per stemmer.

pub mod exceptions;
pub mod suffixes;

pub use exceptions::{ExceptionTables, ExceptionTablesBuilder};
pub use suffixes::{Guard, SuffixRule, STEP_2, STEP_3, STEP_4};
