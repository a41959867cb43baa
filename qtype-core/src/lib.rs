//! Question type classification for natural-language input
//!
//! A line of text is split into sentences, each sentence is tagged with a
//! part-of-speech code as a single unit, and a small rule table turns the
//! tags into question types:
//!
//! - `WP` (wh-pronoun) gives `What`
//! - `WRB` (wh-adverb) gives `When`, `Where`, or `Where` then `When`,
//!   depending on which cue words the sentence contains
//! - a line where nothing matched is `Affirmative`
//!
//! # Architecture
//!
//! - [`model`]: the segmentation and tagging contract, plus TOML-backed
//!   models loaded once at startup
//! - [`rules`]: the ordered rule table and wh-adverb disambiguation
//! - [`classifier`]: orchestration and the fallback policy
//!
//! # Example
//!
//! ```rust
//! use qtype_core::{Classifier, QuestionType};
//!
//! let classifier = Classifier::embedded().unwrap();
//!
//! let result = classifier.classify("Where and when will we meet?").unwrap();
//! assert_eq!(result.labels(), &[QuestionType::Where, QuestionType::When]);
//!
//! let result = classifier.classify("The sky is blue.").unwrap();
//! assert!(result.is_affirmative());
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod rules;
pub mod tagset;

pub use classifier::{
    Classification, Classifier, ClassifierBuilder, DetailedClassification,
    SentenceClassification,
};
pub use config::{Config, ConfigBuilder, ModelSource};
pub use error::{Error, ModelKind, Result};
pub use model::{ModelPaths, ModelProvider, PosTagger, SentenceSegmenter};
pub use rules::{Contribution, LabelProducer, QuestionType, Rule, RuleTable};
pub use tagset::PosTag;
