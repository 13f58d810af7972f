//! Plain text output formatter

use super::{optional, OutputFormatter};
use anyhow::Result;
use lexis_core::{CefrLevel, DocumentMetrics};
use std::io::Write;

/// Plain text formatter - outputs one block per document
pub struct TextFormatter<W: Write> {
    writer: W,
    list_connectors: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            list_connectors: true,
            documents: 0,
        }
    }

    /// Toggle the per-document connector list
    pub fn with_connector_list(mut self, list_connectors: bool) -> Self {
        self.list_connectors = list_connectors;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, m: &DocumentMetrics) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        let s = &m.sentences;
        let c = &m.connectors;

        writeln!(self.writer, "Document {}", m.id.as_deref().unwrap_or("<unnamed>"))?;
        writeln!(
            self.writer,
            "  Words:       {} ({} distinct)",
            m.word_count, m.distinct_word_count
        )?;
        writeln!(
            self.writer,
            "  Sentences:   {} (mean {:.2}, median {:.2}, sd {:.2}, min {}, max {})",
            m.sentence_count, s.mean, s.median, s.std_dev, s.min, s.max
        )?;
        writeln!(
            self.writer,
            "  Short/long:  {:.3} / {:.3}",
            s.share_short, s.share_long
        )?;
        writeln!(self.writer, "  MTLD:        {:.2}", m.mtld)?;
        writeln!(self.writer, "  MATTR:       {:.3}", m.mattr)?;
        writeln!(
            self.writer,
            "  Basic vocab: {}",
            optional(m.basic_vocabulary_share, 3)
        )?;
        writeln!(
            self.writer,
            "  Connectors:  {} ({} distinct; coordinating {}, subordinating {}, adverbial {}; {:.2} per sentence)",
            c.connector_count,
            c.distinct_connector_count,
            c.coordinating_count,
            c.subordinating_count,
            c.adverbial_count,
            c.connectors_per_sentence
        )?;
        writeln!(
            self.writer,
            "  Proficiency: {}",
            optional(c.proficiency_score, 2)
        )?;

        let levels: Vec<String> = CefrLevel::ALL
            .iter()
            .map(|level| format!("{level}={}", c.level_counts.get(level).copied().unwrap_or(0)))
            .collect();
        writeln!(self.writer, "  Levels:      {}", levels.join(" "))?;
        writeln!(
            self.writer,
            "  Usage:       once {:.2}%, 2-3 times {:.2}%, more {:.2}%",
            c.usage.pct_used_once, c.usage.pct_used_two_to_three, c.usage.pct_used_more_than_3
        )?;

        if self.list_connectors && !c.connectors.is_empty() {
            writeln!(self.writer, "  Forms:       {}", c.connectors.join(", "))?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
