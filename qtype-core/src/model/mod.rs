//! Linguistic model provider
//!
//! The classifier needs two collaborators: a sentence segmenter and a
//! part-of-speech tagger. Both are traits so that any implementation can be
//! plugged in. The crate ships data-driven implementations whose models are
//! TOML files, loaded once and read-only afterwards.

pub(crate) mod loader;
pub mod pos;
pub mod sentence;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::tagset::PosTag;

pub use loader::{
    load_pos_model, load_sentence_model, EMBEDDED_POS_MODEL, EMBEDDED_SENTENCE_MODEL,
};
pub use pos::{LexiconTagger, PosModelConfig};
pub use sentence::{SentenceDetector, SentenceModelConfig};

/// Splits free text into sentence-like units
pub trait SentenceSegmenter: Send + Sync {
    /// Segment `text` into trimmed sentences, in order.
    ///
    /// Empty or whitespace-only text yields no sentences.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Assigns one part-of-speech tag to each sentence unit
pub trait PosTagger: Send + Sync {
    /// Tag each sentence as a single unit. The output has exactly one tag
    /// per input sentence, in the same order.
    fn tag(&self, sentences: &[String]) -> Vec<PosTag>;
}

/// Default location of the sentence segmentation model
pub const DEFAULT_SENTENCE_MODEL_PATH: &str = "models/en-sent.toml";

/// Default location of the POS tagging model
pub const DEFAULT_POS_MODEL_PATH: &str = "models/en-pos.toml";

/// Resource locations of the two models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// Sentence segmentation model file
    pub sentence: PathBuf,
    /// POS tagging model file
    pub pos: PathBuf,
}

impl ModelPaths {
    /// Create model paths from explicit locations
    pub fn new(sentence: impl Into<PathBuf>, pos: impl Into<PathBuf>) -> Self {
        Self {
            sentence: sentence.into(),
            pos: pos.into(),
        }
    }

    /// Whether both model files exist on disk
    pub fn exist(&self) -> bool {
        self.sentence.is_file() && self.pos.is_file()
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::new(DEFAULT_SENTENCE_MODEL_PATH, DEFAULT_POS_MODEL_PATH)
    }
}

/// The loaded segmentation and tagging models
///
/// Cloning is cheap; the models themselves are shared.
#[derive(Clone)]
pub struct ModelProvider {
    segmenter: Arc<dyn SentenceSegmenter>,
    tagger: Arc<dyn PosTagger>,
}

impl fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelProvider(...)")
    }
}

impl ModelProvider {
    /// Combine an arbitrary segmenter and tagger
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>, tagger: Arc<dyn PosTagger>) -> Self {
        Self { segmenter, tagger }
    }

    /// Load both models from disk.
    ///
    /// The sentence model is loaded first; a failure in either is returned
    /// as-is and nothing is retried.
    pub fn load(paths: &ModelPaths) -> Result<Self> {
        let segmenter = load_sentence_model(&paths.sentence)?;
        let tagger = load_pos_model(&paths.pos)?;
        Ok(Self::new(Arc::new(segmenter), Arc::new(tagger)))
    }

    /// The English models compiled into the crate
    pub fn embedded() -> Result<Self> {
        let segmenter = loader::embedded_sentence_model()?;
        let tagger = loader::embedded_pos_model()?;
        Ok(Self::new(Arc::new(segmenter), Arc::new(tagger)))
    }

    /// Segment text into sentences
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Tag a sentence array, one tag per sentence
    pub fn tag(&self, sentences: &[String]) -> Vec<PosTag> {
        self.tagger.tag(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = ModelPaths::default();
        assert_eq!(paths.sentence, PathBuf::from("models/en-sent.toml"));
        assert_eq!(paths.pos, PathBuf::from("models/en-pos.toml"));
    }

    #[test]
    fn test_missing_paths_do_not_exist() {
        let paths = ModelPaths::new("/nonexistent/sent.toml", "/nonexistent/pos.toml");
        assert!(!paths.exist());
    }

    #[test]
    fn test_embedded_provider_segments_and_tags() {
        let provider = ModelProvider::embedded().unwrap();
        let sentences = provider.segment("What is this? The sky is blue.");
        assert_eq!(sentences, vec!["What is this?", "The sky is blue."]);

        let tags = provider.tag(&sentences);
        assert_eq!(tags, vec![PosTag::Wp, PosTag::Dt]);
    }

    #[test]
    fn test_load_reports_missing_sentence_model_first() {
        let paths = ModelPaths::new("/nonexistent/sent.toml", "/nonexistent/pos.toml");
        let err = ModelProvider::load(&paths).unwrap_err();
        assert!(err.to_string().contains("sentence model"));
        assert!(err.is_fatal());
    }
}
