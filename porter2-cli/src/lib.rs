//! porter2 CLI library
//!
//! This library provides the command-line interface for the Porter2
//! stemmer: batch stemming, reference-list validation and table listing.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
