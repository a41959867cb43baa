//! Rule table mapping POS tags to question types
//!
//! Rules are kept in priority order. For every (sentence, tag) pair the first
//! rule whose tag matches decides the contribution: zero, one or two labels.
//! Tags without a rule contribute nothing.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::tagset::PosTag;

/// Labels contributed by a single sentence
pub type Contribution = SmallVec<[QuestionType; 2]>;

/// The kind of question a line represents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum QuestionType {
    What,
    When,
    Where,
    /// Fallback when no rule matched anywhere in the input
    Affirmative,
    /// Label introduced by a configured rule
    Custom(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::What => "What",
            QuestionType::When => "When",
            QuestionType::Where => "Where",
            QuestionType::Affirmative => "Affirmative",
            QuestionType::Custom(label) => label,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "What" => QuestionType::What,
            "When" => QuestionType::When,
            "Where" => QuestionType::Where,
            "Affirmative" => QuestionType::Affirmative,
            other => QuestionType::Custom(other.to_string()),
        })
    }
}

impl From<String> for QuestionType {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(question_type) => question_type,
            Err(never) => match never {},
        }
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Custom(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

/// How a matching rule turns a sentence into labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelProducer {
    /// Always the same label
    Fixed(QuestionType),
    /// "When" and/or "Where" depending on the words in the sentence
    WhAdverb,
}

impl LabelProducer {
    pub fn produce(&self, sentence: &str) -> Contribution {
        match self {
            LabelProducer::Fixed(label) => smallvec![label.clone()],
            LabelProducer::WhAdverb => disambiguate_wh_adverb(sentence),
        }
    }
}

/// Split a wh-adverb sentence into When / Where.
///
/// Matching is a case-insensitive substring test. When both cue words occur
/// the result is always `[Where, When]`; when neither does it is empty.
pub fn disambiguate_wh_adverb(sentence: &str) -> Contribution {
    let lower = sentence.to_lowercase();
    let has_when = lower.contains("when");
    let has_where = lower.contains("where");

    match (has_where, has_when) {
        (true, true) => smallvec![QuestionType::Where, QuestionType::When],
        (true, false) => smallvec![QuestionType::Where],
        (false, true) => smallvec![QuestionType::When],
        (false, false) => SmallVec::new(),
    }
}

/// A single (tag, label producer) entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    tag: PosTag,
    label: String,
    producer: LabelProducer,
}

impl Rule {
    /// Map `tag` to `label` unconditionally
    pub fn direct(tag: PosTag, label: QuestionType) -> Self {
        Self {
            tag,
            label: label.to_string(),
            producer: LabelProducer::Fixed(label),
        }
    }

    /// Map `tag` to When/Where by looking at the sentence text
    pub fn wh_adverb(tag: PosTag) -> Self {
        Self {
            tag,
            label: "When/Where".to_string(),
            producer: LabelProducer::WhAdverb,
        }
    }

    pub fn tag(&self) -> PosTag {
        self.tag
    }

    /// Display label of the rule. For the wh-adverb rule this is a
    /// placeholder and never appears in a classification.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn producer(&self) -> &LabelProducer {
        &self.producer
    }

    pub fn matches(&self, tag: PosTag) -> bool {
        self.tag == tag
    }

    pub fn apply(&self, sentence: &str) -> Contribution {
        self.producer.produce(sentence)
    }
}

/// Ordered list of rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    /// `WP -> What` and the `WRB` wh-adverb rule
    fn default() -> Self {
        Self::empty()
            .with_rule(Rule::direct(PosTag::Wp, QuestionType::What))
            .with_rule(Rule::wh_adverb(PosTag::Wrb))
    }
}

impl RuleTable {
    /// A table without any rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with the lowest priority so far
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append direct `tag -> label` rules after the existing ones
    pub fn with_direct_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (PosTag, QuestionType)>,
    {
        for (tag, label) in rules {
            self.push(Rule::direct(tag, label));
        }
        self
    }

    /// Labels contributed by `sentence` tagged with `tag`
    pub fn apply(&self, tag: PosTag, sentence: &str) -> Contribution {
        self.rules
            .iter()
            .find(|rule| rule.matches(tag))
            .map(|rule| rule.apply(sentence))
            .unwrap_or_default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
