//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Kind of file to generate
    #[arg(short, long, value_enum, default_value = "settings")]
    pub kind: ConfigKind,

    /// Lexicon code for a lexicon template
    #[arg(short = 'l', long, value_name = "CODE", default_value = "xx")]
    pub lexicon_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Generated file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigKind {
    /// Analysis settings for `analyze --config`
    Settings,
    /// Connector lexicon for `analyze --lexicon-file`
    Lexicon,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating {} template...", self.kind_name());
        println!("  Output file: {}", self.output.display());

        let template = match self.kind {
            ConfigKind::Settings => self.settings_template()?,
            ConfigKind::Lexicon => self.lexicon_template(),
        };

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        match self.kind {
            ConfigKind::Settings => {
                println!("1. Adjust the metric parameters");
                println!("2. Use it for analysis:");
                println!(
                    "   lexis analyze -i 'essays/*.json' --config {}",
                    self.output.display()
                );
            }
            ConfigKind::Lexicon => {
                println!("1. Fill in the connector tables and the basic vocabulary");
                println!("2. Validate your lexicon:");
                println!("   lexis validate --lexicon-file {}", self.output.display());
                println!("3. Use it for analysis:");
                println!(
                    "   lexis analyze -i 'essays/*.json' --lexicon-file {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            ConfigKind::Settings => "settings",
            ConfigKind::Lexicon => "lexicon",
        }
    }

    /// Default settings with explanatory comments
    fn settings_template(&self) -> Result<String> {
        let defaults = CliConfig::default().to_toml_string()?;
        Ok(format!(
            r#"# Lexis analysis settings
#
# [metrics]
#   mtld_threshold     TTR cutoff that closes an MTLD factor, in (0, 1)
#   mattr_window       MATTR sliding window length in tokens
#   short_sentence_lt  sentences with fewer words count as short
#   long_sentence_gt   sentences with more words count as long
#
# [output]
#   pretty_json        pretty-print JSON reports (--compact overrides)
#   list_connectors    list matched connectors in text and markdown reports
#
# [performance]
#   worker_threads     0 uses all cores (--threads overrides)

{defaults}"#
        ))
    }

    /// Lexicon skeleton
    fn lexicon_template(&self) -> String {
        format!(
            r#"# Connector lexicon for {code}
#
# Surface forms are lowercase and may appear in only one table.
# Levels: A1, A2, B1, B2, C1, C2

[metadata]
code = "{code}"
name = "Custom Language"

# Coordinating conjunctions, matched on CCONJ tokens
[connectors.coordinating]
and = "A1"
but = "A1"

# Subordinating conjunctions, matched on SCONJ tokens
[connectors.subordinating]
because = "A2"
although = "B1"

# Adverbial connectors, matched on ADV tokens
[connectors.adverbial]
however = "B1"
nevertheless = "B2"

# Optional high-frequency word list (lemmas, lowercased on load)
[basic_vocabulary]
words = ["be", "have", "do", "say", "go"]
"#,
            code = self.lexicon_code
        )
    }
}
