//! Sentence model configuration
//!
//! This module defines the TOML schema for the sentence segmentation model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root sentence model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceModelConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default)]
    pub treat_as_boundary: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for Ellipsis {
    fn default() -> Self {
        Self {
            treat_as_boundary: false,
            patterns: vec!["...".to_string(), "…".to_string()],
        }
    }
}

/// Characters that may close an enclosure right after a terminator,
/// e.g. `He asked "why?"`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub closing: Vec<char>,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl SentenceModelConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        {
            return Err(format!("Invalid terminator character: {ch:?}"));
        }

        if self.ellipsis.patterns.iter().any(|p| p.is_empty()) {
            return Err("Empty ellipsis pattern".to_string());
        }

        Ok(())
    }

    /// Total number of abbreviations across categories
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.categories.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> SentenceModelConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = [".", "?"]
"#,
        );

        assert!(config.validate().is_ok());
        assert!(!config.ellipsis.treat_as_boundary);
        assert_eq!(config.ellipsis.patterns, vec!["...", "…"]);
        assert!(config.enclosures.closing.is_empty());
        assert_eq!(config.abbreviation_count(), 0);
    }

    #[test]
    fn test_abbreviation_categories_flatten() {
        let config = parse(
            r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = ["."]

[abbreviations]
titles = ["Dr", "Mr"]
months = ["Jan"]
"#,
        );

        assert_eq!(config.abbreviation_count(), 3);
        assert_eq!(config.abbreviations.categories["titles"], vec!["Dr", "Mr"]);
    }

    #[test]
    fn test_validate_rejects_empty_terminators() {
        let config = parse(
            r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = []
"#,
        );

        assert_eq!(
            config.validate().unwrap_err(),
            "No terminator characters defined"
        );
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let config = parse(
            r#"
[metadata]
code = ""
name = "Test"

[terminators]
chars = ["."]
"#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_alphanumeric_terminator() {
        let config = parse(
            r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = [".", "x"]
"#,
        );

        assert!(config.validate().unwrap_err().contains("'x'"));
    }
}
