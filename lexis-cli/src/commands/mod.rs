//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod list;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute linguistic metrics for preprocessed documents
    Analyze(analyze::AnalyzeArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a settings or lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
