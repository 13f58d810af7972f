//! Markdown output formatter

use super::{optional, OutputFormatter};
use anyhow::Result;
use lexis_core::DocumentMetrics;
use std::io::Write;

/// Markdown formatter - outputs one table row per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    list_connectors: bool,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            list_connectors: true,
            document_count: 0,
        }
    }

    /// Toggle the connector column
    pub fn with_connector_list(mut self, list_connectors: bool) -> Self {
        self.list_connectors = list_connectors;
        self
    }

    fn write_header(&mut self) -> Result<()> {
        let mut header = String::from(
            "| Document | Words | Sentences | Mean length | MTLD | MATTR | Basic vocab | Connectors | Proficiency |",
        );
        let mut rule = String::from("|---|---:|---:|---:|---:|---:|---:|---:|---:|");
        if self.list_connectors {
            header.push_str(" Forms |");
            rule.push_str("---|");
        }
        writeln!(self.writer, "{header}")?;
        writeln!(self.writer, "{rule}")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, m: &DocumentMetrics) -> Result<()> {
        if self.document_count == 0 {
            self.write_header()?;
        }
        self.document_count += 1;

        write!(
            self.writer,
            "| {} | {} | {} | {:.2} | {:.2} | {:.3} | {} | {} | {} |",
            m.id.as_deref().unwrap_or("<unnamed>"),
            m.word_count,
            m.sentence_count,
            m.sentence_length,
            m.mtld,
            m.mattr,
            optional(m.basic_vocabulary_share, 3),
            m.connectors.connector_count,
            optional(m.connectors.proficiency_score, 2),
        )?;
        if self.list_connectors {
            write!(self.writer, " {} |", m.connectors.connectors.join(", "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
