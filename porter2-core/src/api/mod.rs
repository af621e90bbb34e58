//! Public stemming API
//!
//! [`Stemmer`] is the memoizing facade over the step pipeline. It owns the
//! exception tables and every cache, and may be shared across threads.

mod config;
mod stemmer;

#[cfg(test)]
mod tests;

pub use config::{defaults, StemmerConfig, StemmerConfigBuilder};
pub use stemmer::{Stemmer, StemmerBuilder};
