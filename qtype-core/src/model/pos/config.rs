//! POS model configuration
//!
//! This module defines the TOML schema for the part-of-speech model. Tag
//! names are kept as strings here and checked against the tagset when the
//! tagger is built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root POS model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosModelConfig {
    pub metadata: Metadata,
    pub tagging: Tagging,
    /// Tag code -> words carrying that tag
    pub lexicon: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub suffixes: Vec<SuffixRule>,
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Fallback tags used when the lexicon has no entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tagging {
    pub default_tag: String,
    #[serde(default = "default_number_tag")]
    pub number_tag: String,
    #[serde(default = "default_proper_noun_tag")]
    pub proper_noun_tag: String,
}

/// Tag words by ending, e.g. `-ing` -> `VBG`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub tag: String,
}

fn default_number_tag() -> String {
    "CD".to_string()
}

fn default_proper_noun_tag() -> String {
    "NNP".to_string()
}

impl PosModelConfig {
    /// Validate the parts that do not depend on the tagset
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.lexicon.values().all(Vec::is_empty) {
            return Err("Lexicon is empty".to_string());
        }

        if self.suffixes.iter().any(|rule| rule.suffix.trim().is_empty()) {
            return Err("Empty suffix in suffix rules".to_string());
        }

        Ok(())
    }

    /// Total number of lexicon entries
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_fallback_tags() {
        let config: PosModelConfig = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"

[tagging]
default_tag = "NN"

[lexicon]
WP = ["what", "who"]
DT = ["the"]

[[suffixes]]
suffix = "ing"
tag = "VBG"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.tagging.number_tag, "CD");
        assert_eq!(config.tagging.proper_noun_tag, "NNP");
        assert_eq!(config.lexicon_size(), 3);
        assert_eq!(config.suffixes.len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_lexicon() {
        let config: PosModelConfig = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"

[tagging]
default_tag = "NN"

[lexicon]
WP = []
"#,
        )
        .unwrap();

        assert_eq!(config.validate().unwrap_err(), "Lexicon is empty");
    }

    #[test]
    fn test_missing_tagging_section_fails_to_parse() {
        let result: Result<PosModelConfig, _> = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"

[lexicon]
WP = ["what"]
"#,
        );

        assert!(result.is_err());
    }
}
