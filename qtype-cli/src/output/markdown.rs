//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use qtype_core::DetailedClassification;
use std::collections::BTreeMap;
use std::io::Write;

/// Markdown formatter - outputs classified lines as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
    totals: BTreeMap<String, usize>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
            totals: BTreeMap::new(),
        }
    }
}

/// Keep table cells intact
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, line: &str, result: &DetailedClassification) -> Result<()> {
        if self.line_count == 0 {
            writeln!(self.writer, "| # | Line | Types |")?;
            writeln!(self.writer, "|---|------|-------|")?;
        }
        self.line_count += 1;

        let labels: Vec<&str> = result.labels.iter().map(|label| label.as_str()).collect();
        for label in &labels {
            *self.totals.entry(label.to_string()).or_default() += 1;
        }

        writeln!(
            self.writer,
            "| {} | {} | {} |",
            self.line_count,
            escape_cell(line),
            escape_cell(&labels.join(", "))
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines: {}*", self.line_count)?;
        for (label, count) in &self.totals {
            writeln!(self.writer, "- {label}: {count}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
