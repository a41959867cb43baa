//! Classify command implementation

use anyhow::{Context, Result};
use clap::Args;
use qtype_core::{Classifier, Config, DetailedClassification, ModelSource};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sentence model file
    #[arg(long, value_name = "FILE", env = "QTYPE_SENTENCE_MODEL")]
    pub sentence_model: Option<PathBuf>,

    /// POS model file
    #[arg(long, value_name = "FILE", env = "QTYPE_POS_MODEL")]
    pub pos_model: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting classification");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let config = self.core_config(&file_config)?;
        log::info!("Models: {}", describe_source(&config.model_source()));

        let classifier = load_classifier(&config)?;

        self.configure_threads()?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to classify", files.len());

        let format = match self.format {
            Some(format) => format,
            None => file_config
                .output
                .default_format
                .parse()
                .map_err(|e: anyhow::Error| CliError::ConfigError(e.to_string()))?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, file_config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let lines = FileReader::read_lines(path)?;
            log::debug!("Classifying {} line(s) from {}", lines.len(), path.display());

            let results = classify_lines(&classifier, &lines)
                .with_context(|| format!("Failed to classify {}", path.display()))?;

            for (line, result) in lines.iter().zip(&results) {
                formatter.format_line(line, result)?;
            }

            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            progress.file_completed(&filename, lines.len());
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Classification complete");
        Ok(())
    }

    /// Merge flags over the config file; flags win
    fn core_config(&self, file_config: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder();

        if let Some(path) = self.sentence_model.as_ref().or(file_config.models.sentence.as_ref()) {
            builder = builder.sentence_model(path.clone());
        }
        if let Some(path) = self.pos_model.as_ref().or(file_config.models.pos.as_ref()) {
            builder = builder.pos_model(path.clone());
        }
        for rule in &file_config.rules {
            builder = builder.rule(rule.tag.clone(), rule.label.clone());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Size the global rayon pool
    fn configure_threads(&self) -> Result<()> {
        match self.threads {
            Some(0) => {
                return Err(CliError::ConfigError("threads must be greater than 0".into()).into())
            }
            Some(threads) => {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .context("Failed to configure thread pool")?;
            }
            None => {}
        }

        log::info!(
            "Using {} worker thread(s)",
            self.threads.unwrap_or_else(num_cpus::get)
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under a test harness
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Load the classifier; the core error stays in the chain as the source
fn load_classifier(config: &Config) -> Result<Classifier> {
    Classifier::from_config(config).map_err(|e| {
        anyhow::Error::from(e).context(CliError::InitializationError(describe_source(
            &config.model_source(),
        )))
    })
}

/// Classify every line in parallel, keeping line order
fn classify_lines(
    classifier: &Classifier,
    lines: &[String],
) -> qtype_core::Result<Vec<DetailedClassification>> {
    lines
        .par_iter()
        .map(|line| classifier.classify_detailed(line))
        .collect()
}

/// Human readable description of where models come from
pub fn describe_source(source: &ModelSource) -> String {
    match source {
        ModelSource::Embedded => "Built-in: English".to_string(),
        ModelSource::Files(paths) => format!(
            "External: sentence={}, pos={}",
            paths.sentence.display(),
            paths.pos.display()
        ),
    }
}
