//! Whitespace tokenization and token normalization

use regex::Regex;
use std::sync::OnceLock;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"[^a-z']+").expect("literal pattern is valid"))
}

/// Lowercase a token and keep only ASCII letters and apostrophes
pub fn normalize_token(token: &str) -> String {
    non_word()
        .replace_all(&token.to_lowercase(), "")
        .into_owned()
}

/// Split text on whitespace, normalizing tokens when asked
///
/// Tokens that normalize to nothing are dropped.
pub fn tokenize(text: &str, normalize: bool) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            if normalize {
                normalize_token(token)
            } else {
                token.to_string()
            }
        })
        .filter(|token| !token.is_empty())
        .collect()
}
