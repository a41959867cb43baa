//! Error types for question type classification

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two linguistic models an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Sentence segmentation model
    Sentence,
    /// Part-of-speech tagging model
    Pos,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Sentence => write!(f, "sentence"),
            ModelKind::Pos => write!(f, "pos"),
        }
    }
}

/// Error type for classification and model loading
#[derive(Debug, Error)]
pub enum Error {
    /// A model resource is missing, unreadable or cannot be parsed
    #[error("failed to load {kind} model from {}: {reason}", path.display())]
    ModelLoad {
        /// The model that failed to load
        kind: ModelKind,
        /// Resource location that was read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A model parsed but its contents are unusable
    #[error("invalid {kind} model: {reason}")]
    InvalidModel {
        /// The offending model
        kind: ModelKind,
        /// Validation failure
        reason: String,
    },

    /// A classifier was requested before its models were provided
    #[error("classifier not initialized: {0}")]
    NotInitialized(String),

    /// The tagger returned a different number of tags than sentences
    #[error("tagger returned {tags} tags for {sentences} sentences")]
    TagCountMismatch {
        /// Number of segmented sentences
        sentences: usize,
        /// Number of tags returned
        tags: usize,
    },

    /// Tag code outside the tagset
    #[error("unknown POS tag: {0}")]
    UnknownTag(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether the error means the classifier can never serve requests
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ModelLoad { .. } | Error::InvalidModel { .. } | Error::NotInitialized(_)
        )
    }
}

/// Result type for classification operations
pub type Result<T> = std::result::Result<T, Error>;
