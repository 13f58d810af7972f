//! Output formatting module

use anyhow::Result;
use lexis_core::DocumentMetrics;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the metrics of one document
    fn format_document(&mut self, metrics: &DocumentMetrics) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render an optional metric, `-` when absent
pub(crate) fn optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}
