//! Question type classifier

use std::fmt;

use serde::Serialize;

use crate::config::{Config, ModelSource};
use crate::error::{Error, Result};
use crate::model::ModelProvider;
use crate::rules::{QuestionType, RuleTable};
use crate::tagset::PosTag;

/// Ordered question types for one input line
///
/// Never empty. Labels follow sentence order and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classification {
    labels: Vec<QuestionType>,
}

impl Classification {
    fn from_labels(mut labels: Vec<QuestionType>) -> Self {
        if labels.is_empty() {
            labels.push(QuestionType::Affirmative);
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[QuestionType] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<QuestionType> {
        self.labels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionType> {
        self.labels.iter()
    }

    pub fn contains(&self, label: &QuestionType) -> bool {
        self.labels.contains(label)
    }

    /// Whether the line fell through to the fallback label
    pub fn is_affirmative(&self) -> bool {
        self.labels == [QuestionType::Affirmative]
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a QuestionType;
    type IntoIter = std::slice::Iter<'a, QuestionType>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

impl fmt::Display for Classification {
    /// Renders as `[What, When]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}")?;
        }
        write!(f, "]")
    }
}

/// What a single sentence contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceClassification {
    pub text: String,
    pub tag: PosTag,
    /// Possibly empty
    pub labels: Vec<QuestionType>,
}

/// Classification together with the per-sentence trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedClassification {
    pub labels: Classification,
    pub sentences: Vec<SentenceClassification>,
}

/// Classifies input lines into question types
///
/// Holds the loaded models and the rule table; both are read-only, so a
/// classifier can be shared between threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    provider: ModelProvider,
    rules: RuleTable,
}

impl Classifier {
    /// Create a classifier from loaded models and a rule table
    pub fn new(provider: ModelProvider, rules: RuleTable) -> Self {
        Self { provider, rules }
    }

    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Classifier over the embedded English models and the default rules
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(ModelProvider::embedded()?, RuleTable::default()))
    }

    /// Load the configured models and install the configured rules
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let provider = match config.model_source() {
            ModelSource::Files(paths) => ModelProvider::load(&paths)?,
            ModelSource::Embedded => {
                log::warn!("No model files found, using the embedded English models");
                ModelProvider::embedded()?
            }
        };

        let rules = RuleTable::default().with_direct_rules(config.rules().iter().cloned());
        Ok(Self::new(provider, rules))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn provider(&self) -> &ModelProvider {
        &self.provider
    }

    /// Classify one input line
    pub fn classify(&self, line: &str) -> Result<Classification> {
        let (sentences, tags) = self.segment_and_tag(line)?;

        let mut labels = Vec::new();
        for (sentence, tag) in sentences.iter().zip(&tags) {
            let contribution = self.rules.apply(*tag, sentence);
            log::trace!("{tag} {sentence:?} -> {contribution:?}");
            labels.extend(contribution);
        }

        let classification = Classification::from_labels(labels);
        log::debug!(
            "Classified {} sentence(s) as {classification}",
            sentences.len()
        );
        Ok(classification)
    }

    /// Classify one input line, keeping what each sentence contributed
    pub fn classify_detailed(&self, line: &str) -> Result<DetailedClassification> {
        let (sentences, tags) = self.segment_and_tag(line)?;

        let sentences: Vec<SentenceClassification> = sentences
            .into_iter()
            .zip(tags)
            .map(|(text, tag)| {
                let labels = self.rules.apply(tag, &text).into_vec();
                SentenceClassification { text, tag, labels }
            })
            .collect();

        let labels = sentences
            .iter()
            .flat_map(|s| s.labels.iter().cloned())
            .collect();

        Ok(DetailedClassification {
            labels: Classification::from_labels(labels),
            sentences,
        })
    }

    /// Classify many lines in parallel, keeping their order
    #[cfg(feature = "parallel")]
    pub fn classify_batch<S>(&self, lines: &[S]) -> Result<Vec<Classification>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.classify(line.as_ref()))
            .collect()
    }

    /// Classify many lines, keeping their order
    #[cfg(not(feature = "parallel"))]
    pub fn classify_batch<S>(&self, lines: &[S]) -> Result<Vec<Classification>>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .iter()
            .map(|line| self.classify(line.as_ref()))
            .collect()
    }

    /// Segment once, then tag the sentence array
    fn segment_and_tag(&self, line: &str) -> Result<(Vec<String>, Vec<PosTag>)> {
        let sentences = self.provider.segment(line);
        let tags = self.provider.tag(&sentences);

        if sentences.len() != tags.len() {
            return Err(Error::TagCountMismatch {
                sentences: sentences.len(),
                tags: tags.len(),
            });
        }

        Ok((sentences, tags))
    }
}

/// Builder for [`Classifier`]
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    provider: Option<ModelProvider>,
    rules: Option<RuleTable>,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loaded models
    pub fn provider(mut self, provider: ModelProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the default rule table
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the classifier; fails when no models were provided
    pub fn build(self) -> Result<Classifier> {
        let provider = self.provider.ok_or_else(|| {
            Error::NotInitialized("no model provider was configured".to_string())
        })?;

        Ok(Classifier::new(provider, self.rules.unwrap_or_default()))
    }
}
