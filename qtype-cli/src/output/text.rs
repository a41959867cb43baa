//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use qtype_core::DetailedClassification;
use std::io::Write;

/// Plain text formatter - outputs each line followed by its labels
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &str, result: &DetailedClassification) -> Result<()> {
        writeln!(self.writer, "{} {}", line, result.labels)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtype_core::Classifier;

    #[test]
    fn test_text_output() {
        let classifier = Classifier::embedded().unwrap();
        let mut formatter = TextFormatter::new(Vec::new());

        for line in ["Where and when will we meet?", "The sky is blue.", ""] {
            let result = classifier.classify_detailed(line).unwrap();
            formatter.format_line(line, &result).unwrap();
        }
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            output,
            "Where and when will we meet? [Where, When]\nThe sky is blue. [Affirmative]\n [Affirmative]\n"
        );
    }
}
