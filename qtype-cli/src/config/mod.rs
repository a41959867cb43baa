//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Model file locations
    #[serde(default)]
    pub models: ModelsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Extra `tag -> label` rules
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Model-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ModelsConfig {
    /// Sentence model file
    pub sentence: Option<PathBuf>,

    /// POS model file
    pub pos: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// A direct rule mapping a POS tag to a label
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    pub tag: String,
    pub label: String,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.models.sentence.is_none());
        assert!(config.models.pos.is_none());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[models]
sentence = "models/custom-sent.toml"
pos = "models/custom-pos.toml"

[output]
default_format = "json"
pretty_json = false

[[rules]]
tag = "WDT"
label = "Which"

[[rules]]
tag = "WP$"
label = "Whose"
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(
            config.models.sentence.as_deref(),
            Some(Path::new("models/custom-sent.toml"))
        );
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[1].tag, "WP$");
        assert_eq!(config.rules[1].label, "Whose");
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"markdown\"\n").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.default_format, "markdown");
        assert!(config.output.pretty_json);
        assert!(config.models.pos.is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/qtype.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
