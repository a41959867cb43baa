//! Lexicon-driven unit tagger

use std::collections::HashMap;

use super::config::PosModelConfig;
use crate::model::PosTagger;
use crate::tagset::PosTag;

/// Tags each sentence unit by its leading word
///
/// Lookup order for that word: lexicon, lexicon after dropping a clitic
/// (`what's` -> `what`), number, suffix rules, capitalisation, default tag. A unit without any word takes the tag of its last
/// punctuation character.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    code: String,
    name: String,
    lexicon: HashMap<String, PosTag>,
    /// Sorted longest suffix first
    suffixes: Vec<(String, PosTag)>,
    default_tag: PosTag,
    number_tag: PosTag,
    proper_noun_tag: PosTag,
}

fn parse_tag(code: &str) -> Result<PosTag, String> {
    code.parse::<PosTag>().map_err(|e| e.to_string())
}

impl LexiconTagger {
    /// Create from configuration
    pub fn from_config(config: &PosModelConfig) -> Result<Self, String> {
        config.validate()?;

        let mut lexicon = HashMap::new();
        for (code, words) in &config.lexicon {
            let tag = parse_tag(code)?;
            for word in words {
                let word = word.trim().to_lowercase().replace('’', "'");
                if let Some(previous) = lexicon.insert(word.clone(), tag) {
                    if previous != tag {
                        return Err(format!(
                            "Word '{word}' listed under both {previous} and {tag}"
                        ));
                    }
                }
            }
        }

        let mut suffixes = config
            .suffixes
            .iter()
            .map(|rule| Ok((rule.suffix.trim().to_lowercase(), parse_tag(&rule.tag)?)))
            .collect::<Result<Vec<_>, String>>()?;
        suffixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            lexicon,
            suffixes,
            default_tag: parse_tag(&config.tagging.default_tag)?,
            number_tag: parse_tag(&config.tagging.number_tag)?,
            proper_noun_tag: parse_tag(&config.tagging.proper_noun_tag)?,
        })
    }

    pub fn language_code(&self) -> &str {
        &self.code
    }

    pub fn language_name(&self) -> &str {
        &self.name
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Tag a single sentence unit
    pub fn tag_unit(&self, unit: &str) -> PosTag {
        match leading_word(unit) {
            Some(word) => self.tag_word(word),
            None => unit
                .trim()
                .chars()
                .next_back()
                .and_then(PosTag::for_punctuation)
                .unwrap_or(PosTag::Sym),
        }
    }

    /// Tag a single word
    pub fn tag_word(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase().replace('’', "'");

        if let Some(tag) = self.lexicon.get(&lower) {
            return *tag;
        }

        if let Some(tag) = strip_clitic(&lower).and_then(|stem| self.lexicon.get(stem)) {
            return *tag;
        }

        if is_number(word) {
            return self.number_tag;
        }

        if let Some((_, tag)) = self
            .suffixes
            .iter()
            .find(|(suffix, _)| lower.len() > suffix.len() && lower.ends_with(suffix.as_str()))
        {
            return *tag;
        }

        if word.chars().next().is_some_and(char::is_uppercase) {
            return self.proper_noun_tag;
        }

        self.default_tag
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, sentences: &[String]) -> Vec<PosTag> {
        sentences.iter().map(|s| self.tag_unit(s)).collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '’'
}

/// First run of word characters, without surrounding apostrophes
fn leading_word(unit: &str) -> Option<&str> {
    unit.split(|c: char| !is_word_char(c))
        .map(|w| w.trim_matches(|c: char| c == '\'' || c == '’'))
        .find(|w| !w.is_empty())
}

const CLITICS: &[&str] = &["'s", "'re", "'ll", "'d", "'ve", "'m"];

/// Stem of a contracted word; expects `'` as the apostrophe
fn strip_clitic(word: &str) -> Option<&str> {
    CLITICS
        .iter()
        .find_map(|clitic| word.strip_suffix(*clitic))
        .filter(|stem| !stem.is_empty())
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}
