//! Validate command implementation

use anyhow::{bail, Result};
use clap::{ArgGroup, Args};
use qtype_core::model::{load_pos_model, load_sentence_model};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("models")
        .required(true)
        .multiple(true)
        .args(["sentence_model", "pos_model"])
))]
pub struct ValidateArgs {
    /// Sentence model file to validate
    #[arg(long, value_name = "FILE")]
    pub sentence_model: Option<PathBuf>,

    /// POS model file to validate
    #[arg(long, value_name = "FILE")]
    pub pos_model: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut failures = 0;

        if let Some(path) = &self.sentence_model {
            if !validate_sentence_model(path) {
                failures += 1;
            }
        }
        if let Some(path) = &self.pos_model {
            if !validate_pos_model(path) {
                failures += 1;
            }
        }

        if failures > 0 {
            bail!("Validation failed for {failures} model(s)");
        }
        Ok(())
    }
}

fn validate_sentence_model(path: &Path) -> bool {
    println!("Validating sentence model: {}", path.display());

    match load_sentence_model(path) {
        Ok(detector) => {
            println!("✓ Sentence model is valid!");
            println!("  Language code: {}", detector.language_code());
            println!("  Language name: {}", detector.language_name());
            println!("  Abbreviations: {}", detector.abbreviation_count());
            true
        }
        Err(e) => {
            println!("✗ Sentence model is invalid!");
            println!("  Error: {e}");
            false
        }
    }
}

fn validate_pos_model(path: &Path) -> bool {
    println!("Validating POS model: {}", path.display());

    match load_pos_model(path) {
        Ok(tagger) => {
            println!("✓ POS model is valid!");
            println!("  Language code: {}", tagger.language_code());
            println!("  Language name: {}", tagger.language_name());
            println!("  Lexicon entries: {}", tagger.lexicon_size());
            true
        }
        Err(e) => {
            println!("✗ POS model is invalid!");
            println!("  Error: {e}");
            false
        }
    }
}
