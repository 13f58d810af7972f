//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexis_core::DocumentMetrics;
use std::io::Write;

/// JSON formatter - outputs all documents as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentMetrics>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            documents: Vec::new(),
        }
    }

    /// Emit compact instead of pretty-printed JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, metrics: &DocumentMetrics) -> Result<()> {
        self.documents.push(metrics.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{empty_metrics, sample_metrics};
    use serde_json::Value;

    #[test]
    fn test_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.format_document(&sample_metrics()).unwrap();
            formatter.format_document(&empty_metrics()).unwrap();
            formatter.finish().unwrap();
        }

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        let documents = value.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["id"], "0042");
        assert_eq!(documents[0]["connectors"]["connector_count"], 2);
        assert_eq!(documents[0]["connectors"]["level_counts"]["A2"], 1);
        assert!(documents[1]["connectors"]["proficiency_score"].is_null());
    }

    #[test]
    fn test_compact_is_single_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).compact();
            formatter.format_document(&sample_metrics()).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_no_documents_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
