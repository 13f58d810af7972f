//! List command implementation

use super::analyze::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use lexis_core::{get_lexicon, list_available_lexicons, CefrLevel};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded lexicons
    Lexicons,

    /// List CEFR levels and their scores
    Levels,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        match self {
            ListCommands::Lexicons => {
                lines.push("Embedded lexicons:".to_string());
                for code in list_available_lexicons() {
                    let lexicon = get_lexicon(code)?;
                    lines.push(format!(
                        "  {:<4} {} ({} connectors, {} basic words)",
                        code,
                        lexicon.name(),
                        lexicon.len(),
                        lexicon.basic_vocabulary_len()
                    ));
                }
            }
            ListCommands::Levels => {
                lines.push("CEFR levels:".to_string());
                for level in CefrLevel::ALL {
                    lines.push(format!("  {level}  score {}", level.ordinal()));
                }
            }
            ListCommands::Formats => {
                lines.push("Output formats:".to_string());
                for format in OutputFormat::ALL {
                    lines.push(format!("  {:<9} {}", format.as_str(), format.description()));
                }
            }
        }
        Ok(lines)
    }
}
