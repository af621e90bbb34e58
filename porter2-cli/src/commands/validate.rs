//! Validate command implementation

use anyhow::Result;
use clap::Args;
use porter2_core::Stemmer;
use std::io::{self, Write};
use std::path::Path;

use super::init_logging;
use crate::error::CliError;
use crate::input::{resolve_patterns, read_text};

/// Arguments for the validate command
#[derive(Debug, Default, Args)]
pub struct ValidateArgs {
    /// Vocabulary files of whitespace-separated `input expected` pairs
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Print at most this many mismatches (default: all)
    #[arg(long, value_name = "N")]
    pub show: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of checking one or more vocabulary files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Pairs checked
    pub total: usize,
    /// Pairs whose stem differed from the expected one
    pub mismatches: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let stdout = io::stdout();
        let report = self.check(&mut stdout.lock())?;
        log::info!(
            "Validated {} pairs, {} mismatches",
            report.total,
            report.mismatches
        );

        if report.mismatches > 0 {
            return Err(CliError::ValidationFailed {
                mismatches: report.mismatches,
                total: report.total,
            }
            .into());
        }
        Ok(())
    }

    /// Stem every pair, writing mismatches and the final count to `out`
    pub fn check<W: Write>(&self, out: &mut W) -> Result<ValidationReport> {
        let files = resolve_patterns(&self.input)?;
        let stemmer = Stemmer::new();
        let limit = self.show.unwrap_or(usize::MAX);
        let mut report = ValidationReport::default();

        for path in &files {
            let text = read_text(path)?;
            for (input, expected) in parse_pairs(&text, path)? {
                report.total += 1;
                let actual = stemmer.stem(input);
                if actual != expected {
                    report.mismatches += 1;
                    if report.mismatches <= limit {
                        writeln!(out, "{input}=>{actual} but should be {expected}")?;
                    }
                }
            }
        }

        writeln!(out, "{} errors in stemming.", report.mismatches)?;
        out.flush()?;
        Ok(report)
    }
}

/// Split vocabulary text into `(input, expected)` pairs
fn parse_pairs<'a>(text: &'a str, path: &Path) -> Result<Vec<(&'a str, &'a str)>, CliError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(CliError::MalformedVocabulary(format!(
            "{}: odd number of tokens ({})",
            path.display(),
            tokens.len()
        )));
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir, name: &str, contents: &str) -> ValidateArgs {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        ValidateArgs {
            input: vec![path.display().to_string()],
            quiet: true,
            ..Default::default()
        }
    }

    fn run(args: &ValidateArgs) -> (ValidationReport, String) {
        let mut buffer = Vec::new();
        let report = args.check(&mut buffer).unwrap();
        (report, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("running run\nflies fli\n", Path::new("v.txt")).unwrap();
        assert_eq!(pairs, vec![("running", "run"), ("flies", "fli")]);

        let err = parse_pairs("running run flies", Path::new("v.txt")).unwrap_err();
        assert!(matches!(err, CliError::MalformedVocabulary(_)));
    }

    #[test]
    fn test_all_pairs_match() {
        let dir = TempDir::new().unwrap();
        let args = args_for(&dir, "ok.txt", "running run\nskis ski\ngenerously generous\n");

        let (report, output) = run(&args);
        assert_eq!(report, ValidationReport { total: 3, mismatches: 0 });
        assert_eq!(output, "0 errors in stemming.\n");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_mismatches_reported() {
        let dir = TempDir::new().unwrap();
        let args = args_for(&dir, "bad.txt", "running runn\nflies fly\njumps jump\n");

        let (report, output) = run(&args);
        assert_eq!(report, ValidationReport { total: 3, mismatches: 2 });
        assert_eq!(
            output,
            "running=>run but should be runn\nflies=>fli but should be fly\n2 errors in stemming.\n"
        );

        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed { mismatches: 2, total: 3 })
        ));
    }

    #[test]
    fn test_show_limits_output() {
        let dir = TempDir::new().unwrap();
        let args = ValidateArgs {
            show: Some(1),
            ..args_for(&dir, "bad.txt", "running runn\nflies fly\n")
        };

        let (report, output) = run(&args);
        assert_eq!(report.mismatches, 2);
        assert_eq!(output, "running=>run but should be runn\n2 errors in stemming.\n");
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let args = args_for(&dir, "odd.txt", "running run flies\n");
        let err = args.check(&mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("Malformed vocabulary:"));
    }
}
