//! Stem command implementation

use anyhow::{Context, Result};
use clap::Args;
use porter2_core::Stemmer;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, tokenize, WordSource};
use crate::output::{create_formatter, OutputFormat, StemRecord};
use crate::progress::StemProgress;

/// Arguments for the stem command
#[derive(Debug, Default, Args)]
pub struct StemArgs {
    /// Words to stem (reads stdin when neither words nor inputs are given)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lowercase tokens and keep only letters and apostrophes
    #[arg(long)]
    pub normalize: bool,

    /// Stem input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print cache statistics after the stems
    #[arg(long)]
    pub stats: bool,

    /// Print each input word next to its stem
    #[arg(long)]
    pub with_input: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Flags merged over the configuration file
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    normalize: bool,
    with_input: bool,
    threads: usize,
}

impl StemArgs {
    /// Execute the stem command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting stemming");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        let stemmer = Stemmer::with_config(config.cache.stemmer_config()?);

        let records = self.stem_inputs(&stemmer, &settings)?;
        log::info!("Stemmed {} tokens", records.len());

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(settings.format, writer, settings.with_input);
        for record in &records {
            formatter.format_stem(&record.word, &record.stem)?;
        }
        if self.stats {
            formatter.format_stats(&stemmer.cache_stats())?;
        }
        formatter.finish()
    }

    fn settings(&self, config: &CliConfig) -> Result<Settings, CliError> {
        let threads = self
            .threads
            .or(config.processing.threads)
            .unwrap_or_else(num_cpus::get);
        if threads == 0 {
            return Err(CliError::ConfigError(
                "threads must be greater than 0".into(),
            ));
        }

        Ok(Settings {
            format: self
                .format
                .or(config.output.format)
                .unwrap_or(OutputFormat::Text),
            normalize: self.normalize || config.processing.normalize,
            with_input: self.with_input || config.output.with_input,
            threads,
        })
    }

    /// Stem positional words, then files, falling back to stdin
    fn stem_inputs(&self, stemmer: &Stemmer, settings: &Settings) -> Result<Vec<StemRecord>> {
        let mut records = Vec::new();
        for word in &self.words {
            records.extend(stem_text(stemmer, word, settings.normalize));
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            records.extend(self.stem_files(stemmer, &files, settings)?);
        } else if self.words.is_empty() {
            records.extend(stem_source(stemmer, &WordSource::Stdin, settings.normalize)?);
        }

        Ok(records)
    }

    fn stem_files(
        &self,
        stemmer: &Stemmer,
        files: &[PathBuf],
        settings: &Settings,
    ) -> Result<Vec<StemRecord>> {
        let progress = StemProgress::start(files.len(), self.quiet || files.len() < 2);

        let process = |path: &PathBuf| -> Result<Vec<StemRecord>> {
            let source = WordSource::File(path.clone());
            let records = stem_source(stemmer, &source, settings.normalize)?;
            progress.file_stemmed(&source.to_string(), records.len());
            Ok(records)
        };

        let batches: Vec<Vec<StemRecord>> = if self.parallel {
            log::info!("Stemming {} files on {} threads", files.len(), settings.threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(settings.threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(process).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(process).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        log::debug!("{} tokens across {} files", progress.tokens(), files.len());
        Ok(batches.into_iter().flatten().collect())
    }
}

fn stem_source(
    stemmer: &Stemmer,
    source: &WordSource,
    normalize: bool,
) -> Result<Vec<StemRecord>> {
    let text = source.read()?;
    let records = stem_text(stemmer, &text, normalize);
    log::debug!("{source}: {} tokens", records.len());
    Ok(records)
}

fn stem_text(stemmer: &Stemmer, text: &str, normalize: bool) -> Vec<StemRecord> {
    tokenize(text, normalize)
        .into_iter()
        .map(|word| {
            let stem = stemmer.stem(&word);
            StemRecord { word, stem }
        })
        .collect()
}
