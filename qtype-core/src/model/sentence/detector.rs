//! Rule-driven sentence boundary detector

use super::config::SentenceModelConfig;
use super::tables::{AbbreviationSet, CharTable};
use crate::model::SentenceSegmenter;

/// Sentence segmenter built from a [`SentenceModelConfig`]
#[derive(Debug, Clone)]
pub struct SentenceDetector {
    code: String,
    name: String,
    terminators: CharTable,
    closing: CharTable,
    ellipsis_patterns: Vec<String>,
    ellipsis_is_boundary: bool,
    abbreviations: AbbreviationSet,
}

impl SentenceDetector {
    /// Create from configuration
    pub fn from_config(config: &SentenceModelConfig) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: CharTable::new(config.terminators.chars.iter().copied()),
            closing: CharTable::new(config.enclosures.closing.iter().copied()),
            ellipsis_patterns: config.ellipsis.patterns.clone(),
            ellipsis_is_boundary: config.ellipsis.treat_as_boundary,
            abbreviations: AbbreviationSet::from_categories(&config.abbreviations.categories),
        })
    }

    pub fn language_code(&self) -> &str {
        &self.code
    }

    pub fn language_name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Decide whether the terminator run `text[start..end]` closes a sentence
    fn is_boundary(&self, text: &str, start: usize, end: usize) -> bool {
        let run = &text[start..end];

        if self.is_ellipsis(run) {
            return self.ellipsis_is_boundary;
        }

        if run == "." {
            let word = preceding_word(&text[..start]);
            if self.abbreviations.contains(word) {
                return false;
            }
        }

        true
    }

    fn is_ellipsis(&self, run: &str) -> bool {
        (run.len() > 1 && run.chars().all(|c| c == '.'))
            || self
                .ellipsis_patterns
                .iter()
                .any(|p| run.ends_with(p.as_str()))
    }
}

/// The word directly before a dot, without leading brackets or quotes
fn preceding_word(before: &str) -> &str {
    before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

impl SentenceSegmenter for SentenceDetector {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(pos, _)| pos);

        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !self.terminators.contains(chars[i].1) {
                i += 1;
                continue;
            }

            // A run of terminators ("?!", "...") is decided as a whole
            let mut run_end = i;
            while run_end + 1 < chars.len() && self.terminators.contains(chars[run_end + 1].1) {
                run_end += 1;
            }

            let mut end = run_end;
            while end + 1 < chars.len() && self.closing.contains(chars[end + 1].1) {
                end += 1;
            }

            let at_break = chars
                .get(end + 1)
                .map_or(true, |&(_, next)| next.is_whitespace());

            if at_break && self.is_boundary(text, chars[i].0, byte_at(run_end + 1)) {
                let sentence_end = byte_at(end + 1);
                push_trimmed(&mut sentences, &text[start..sentence_end]);
                start = sentence_end;
            }

            i = end + 1;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> SentenceDetector {
        let config: SentenceModelConfig = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"

[terminators]
chars = [".", "!", "?"]

[ellipsis]
treat_as_boundary = false
patterns = ["...", "…"]

[enclosures]
closing = ['"', ")", "”"]

[abbreviations]
titles = ["Dr", "Mr", "Mrs"]
geo = ["U.S"]
"#,
        )
        .unwrap();
        SentenceDetector::from_config(&config).unwrap()
    }

    #[test]
    fn test_empty_text() {
        assert!(detector().segment("").is_empty());
        assert!(detector().segment("   \t ").is_empty());
    }

    #[test]
    fn test_single_sentence() {
        assert_eq!(
            detector().segment("What is your name?"),
            vec!["What is your name?"]
        );
    }

    #[test]
    fn test_multiple_sentences() {
        assert_eq!(
            detector().segment("Hello world. Where are you? I am here!"),
            vec!["Hello world.", "Where are you?", "I am here!"]
        );
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        assert_eq!(
            detector().segment("It rained. when will it stop"),
            vec!["It rained.", "when will it stop"]
        );
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        assert_eq!(
            detector().segment("Dr. Smith arrived. Where is he?"),
            vec!["Dr. Smith arrived.", "Where is he?"]
        );
        assert_eq!(
            detector().segment("She moved to the U.S. last year."),
            vec!["She moved to the U.S. last year."]
        );
    }

    #[test]
    fn test_decimal_does_not_split() {
        assert_eq!(
            detector().segment("Pi is 3.14 roughly. Why?"),
            vec!["Pi is 3.14 roughly.", "Why?"]
        );
    }

    #[test]
    fn test_terminator_run_is_one_boundary() {
        assert_eq!(
            detector().segment("Really?! Yes."),
            vec!["Really?!", "Yes."]
        );
    }

    #[test]
    fn test_ellipsis_is_not_a_boundary() {
        assert_eq!(
            detector().segment("Well... I guess so."),
            vec!["Well... I guess so."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            detector().segment(r#"He asked "why?" Then he left."#),
            vec![r#"He asked "why?""#, "Then he left."]
        );
    }

    #[test]
    fn test_terminator_inside_word_does_not_split() {
        assert_eq!(
            detector().segment("Visit example.com today."),
            vec!["Visit example.com today."]
        );
    }

    #[test]
    fn test_metadata_accessors() {
        let detector = detector();
        assert_eq!(detector.language_code(), "en");
        assert_eq!(detector.language_name(), "English");
        assert_eq!(detector.abbreviation_count(), 4);
    }
}
