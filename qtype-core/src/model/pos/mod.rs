//! Part-of-speech tagging model

mod config;
mod tagger;

pub use config::{Metadata, PosModelConfig, SuffixRule, Tagging};
pub use tagger::LexiconTagger;
