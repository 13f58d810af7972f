//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use lexis_core::{CefrLevel, ConnectorCategory, Lexicon};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short = 'l', long, value_name = "FILE", required = true)]
    pub lexicon_file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon_file.display());

        if !self.lexicon_file.exists() {
            return Err(CliError::FileNotFound(self.lexicon_file.display().to_string()).into());
        }

        match Lexicon::from_file(&self.lexicon_file) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                for category in ConnectorCategory::ALL {
                    println!(
                        "  {:<14} {:>3} connectors ({})",
                        format!("{category}:"),
                        lexicon.entries(category).len(),
                        level_summary(&lexicon, category)
                    );
                }
                if lexicon.has_basic_vocabulary() {
                    println!("  Basic vocabulary: {} words", lexicon.basic_vocabulary_len());
                } else {
                    println!("  Basic vocabulary: none");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Per-level counts of one category, e.g. `A1=3 B2=1`
fn level_summary(lexicon: &Lexicon, category: ConnectorCategory) -> String {
    let entries = lexicon.entries(category);
    let parts: Vec<String> = CefrLevel::ALL
        .iter()
        .filter_map(|&level| {
            let count = entries.iter().filter(|(_, l)| *l == level).count();
            (count > 0).then(|| format!("{level}={count}"))
        })
        .collect();

    if parts.is_empty() {
        "empty".to_string()
    } else {
        parts.join(" ")
    }
}
