//! Classifier configuration

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::ModelPaths;
use crate::rules::QuestionType;
use crate::tagset::PosTag;

/// Where the classifier gets its models from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Model files on disk
    Files(ModelPaths),
    /// The English models compiled into the crate
    Embedded,
}

/// Classifier configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) sentence_model: Option<PathBuf>,
    pub(crate) pos_model: Option<PathBuf>,
    pub(crate) rules: Vec<(PosTag, QuestionType)>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the model locations.
    ///
    /// Explicit paths always win and fall back to the default location for
    /// the model that was not given. Without explicit paths the default
    /// files are used when both exist, otherwise the embedded models.
    pub fn model_source(&self) -> ModelSource {
        let defaults = ModelPaths::default();

        if self.sentence_model.is_none() && self.pos_model.is_none() {
            return if defaults.exist() {
                ModelSource::Files(defaults)
            } else {
                ModelSource::Embedded
            };
        }

        ModelSource::Files(ModelPaths {
            sentence: self.sentence_model.clone().unwrap_or(defaults.sentence),
            pos: self.pos_model.clone().unwrap_or(defaults.pos),
        })
    }

    /// Extra direct rules, appended after the default rule table
    pub fn rules(&self) -> &[(PosTag, QuestionType)] {
        &self.rules
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("sentence model", &self.sentence_model),
            ("pos model", &self.pos_model),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(Error::Configuration(format!(
                    "{name} path must not be empty"
                )));
            }
        }

        if let Some((tag, _)) = self.rules.iter().find(|(_, label)| label.as_str().is_empty()) {
            return Err(Error::Configuration(format!(
                "rule for {tag} has an empty label"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sentence_model: Option<PathBuf>,
    pos_model: Option<PathBuf>,
    rules: Vec<(String, String)>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence model file
    pub fn sentence_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.sentence_model = Some(path.into());
        self
    }

    /// Set the POS model file
    pub fn pos_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.pos_model = Some(path.into());
        self
    }

    /// Add a direct `tag -> label` rule
    pub fn rule(mut self, tag: impl Into<String>, label: impl Into<String>) -> Self {
        self.rules.push((tag.into(), label.into()));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let rules = self
            .rules
            .into_iter()
            .map(|(tag, label)| {
                let tag = tag.parse::<PosTag>()?;
                Ok((tag, QuestionType::from(label.trim().to_string())))
            })
            .collect::<Result<Vec<_>>>()?;

        let config = Config {
            sentence_model: self.sentence_model,
            pos_model: self.pos_model,
            rules,
        };

        config.validate()?;
        Ok(config)
    }
}
