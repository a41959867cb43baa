//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use qtype_core::{DetailedClassification, QuestionType, SentenceClassification};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs classified lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<LineRecord>,
}

/// One classified input line
#[derive(Debug, Serialize)]
pub struct LineRecord {
    /// The input line
    pub line: String,
    /// Labels for the whole line
    pub labels: Vec<QuestionType>,
    /// Per-sentence trace
    pub sentences: Vec<SentenceClassification>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &str, result: &DetailedClassification) -> Result<()> {
        self.records.push(LineRecord {
            line: line.to_string(),
            labels: result.labels.labels().to_vec(),
            sentences: result.sentences.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtype_core::Classifier;
    use serde_json::{json, Value};

    fn render(lines: &[&str], pretty: bool) -> String {
        let classifier = Classifier::embedded().unwrap();
        let mut formatter = JsonFormatter::new(Vec::new(), pretty);
        for line in lines {
            let result = classifier.classify_detailed(line).unwrap();
            formatter.format_line(line, &result).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_json_records() {
        let output = render(&["What is this? The sky is blue."], false);
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!([{
                "line": "What is this? The sky is blue.",
                "labels": ["What"],
                "sentences": [
                    { "text": "What is this?", "tag": "WP", "labels": ["What"] },
                    { "text": "The sky is blue.", "tag": "DT", "labels": [] }
                ]
            }])
        );
    }

    #[test]
    fn test_compact_is_single_line() {
        let output = render(&["When?", "Okay."], false);
        assert_eq!(output.lines().count(), 1);

        let pretty = render(&["When?", "Okay."], true);
        assert!(pretty.lines().count() > 1);
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        assert_eq!(render(&[], false).trim(), "[]");
    }
}
