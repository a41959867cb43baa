//! Sentence segmentation model

mod config;
mod detector;
mod tables;

pub use config::{Abbreviations, Ellipsis, Enclosures, Metadata, SentenceModelConfig, Terminators};
pub use detector::SentenceDetector;
