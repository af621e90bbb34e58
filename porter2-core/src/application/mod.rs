//! Application layer: the step pipeline and its memo tables
//!
//! The pipeline orchestrates the domain predicates over a [`WordBuffer`]
//! for one word at a time. Memo tables are owned by the caller (the
//! [`Stemmer`] facade) and lent to the pipeline by reference, so a
//! pipeline never outlives the state it caches into.
//!
//! [`WordBuffer`]: crate::domain::WordBuffer
//! [`Stemmer`]: crate::Stemmer

pub mod evaluator;
pub mod memo;
pub mod pipeline;

pub use evaluator::Evaluator;
pub use memo::{CacheStats, Memo, MemoStats};
pub use pipeline::Pipeline;
