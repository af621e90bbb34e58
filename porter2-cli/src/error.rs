//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A vocabulary file is not made of `input expected` pairs
    MalformedVocabulary(String),
    /// Some reference pairs did not stem as expected
    ValidationFailed {
        /// Pairs whose stem differed
        mismatches: usize,
        /// Pairs checked
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MalformedVocabulary(msg) => write!(f, "Malformed vocabulary: {msg}"),
            CliError::ValidationFailed { mismatches, total } => {
                write!(f, "Validation failed: {mismatches} of {total} pairs mismatched")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<porter2_core::Error> for CliError {
    fn from(error: porter2_core::Error) -> Self {
        CliError::ConfigError(error.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("threads must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: threads must be greater than 0"
        );
    }

    #[test]
    fn test_validation_failed_display() {
        let error = CliError::ValidationFailed {
            mismatches: 2,
            total: 10,
        };
        assert_eq!(
            error.to_string(),
            "Validation failed: 2 of 10 pairs mismatched"
        );
    }

    #[test]
    fn test_from_core_error() {
        let core = porter2_core::Error::Configuration("initial_capacity requires cache_stems".into());
        let error = CliError::from(core);
        assert!(matches!(error, CliError::ConfigError(_)));
        assert!(error.to_string().contains("initial_capacity requires cache_stems"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(CliError::MalformedVocabulary("odd".into()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Malformed vocabulary: odd");
    }
}
