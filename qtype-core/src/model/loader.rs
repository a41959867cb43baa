//! Model loading from files and from the embedded defaults

use std::fs;
use std::path::Path;

use crate::error::{Error, ModelKind, Result};
use crate::model::pos::{LexiconTagger, PosModelConfig};
use crate::model::sentence::{SentenceDetector, SentenceModelConfig};

/// Built-in English sentence model
pub const EMBEDDED_SENTENCE_MODEL: &str = include_str!("../../models/en-sent.toml");

/// Built-in English POS model
pub const EMBEDDED_POS_MODEL: &str = include_str!("../../models/en-pos.toml");

fn read_model(kind: ModelKind, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::ModelLoad {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_model<T: serde::de::DeserializeOwned>(
    kind: ModelKind,
    path: &Path,
    content: &str,
) -> Result<T> {
    toml::from_str(content).map_err(|e| Error::ModelLoad {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn sentence_from_str(path: &Path, content: &str) -> Result<SentenceDetector> {
    let config: SentenceModelConfig = parse_model(ModelKind::Sentence, path, content)?;
    let detector =
        SentenceDetector::from_config(&config).map_err(|reason| Error::InvalidModel {
            kind: ModelKind::Sentence,
            reason,
        })?;

    log::info!(
        "Loaded sentence model '{}' ({}) from {}: {} abbreviations",
        detector.language_name(),
        detector.language_code(),
        path.display(),
        detector.abbreviation_count()
    );
    Ok(detector)
}

fn pos_from_str(path: &Path, content: &str) -> Result<LexiconTagger> {
    let config: PosModelConfig = parse_model(ModelKind::Pos, path, content)?;
    let tagger = LexiconTagger::from_config(&config).map_err(|reason| Error::InvalidModel {
        kind: ModelKind::Pos,
        reason,
    })?;

    log::info!(
        "Loaded POS model '{}' ({}) from {}: {} lexicon entries, {} suffix rules",
        tagger.language_name(),
        tagger.language_code(),
        path.display(),
        tagger.lexicon_size(),
        config.suffixes.len()
    );
    Ok(tagger)
}

/// Load and validate a sentence model file
pub fn load_sentence_model(path: &Path) -> Result<SentenceDetector> {
    let content = read_model(ModelKind::Sentence, path)?;
    sentence_from_str(path, &content)
}

/// Load and validate a POS model file
pub fn load_pos_model(path: &Path) -> Result<LexiconTagger> {
    let content = read_model(ModelKind::Pos, path)?;
    pos_from_str(path, &content)
}

pub(crate) fn embedded_sentence_model() -> Result<SentenceDetector> {
    sentence_from_str(Path::new("<embedded>/en-sent.toml"), EMBEDDED_SENTENCE_MODEL)
}

pub(crate) fn embedded_pos_model() -> Result<LexiconTagger> {
    pos_from_str(Path::new("<embedded>/en-pos.toml"), EMBEDDED_POS_MODEL)
}
