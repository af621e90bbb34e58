//! Input handling module

pub mod glob_resolver;
pub mod source;
pub mod tokenizer;

pub use glob_resolver::resolve_patterns;
pub use source::{read_text, WordSource};
pub use tokenizer::{normalize_token, tokenize};
