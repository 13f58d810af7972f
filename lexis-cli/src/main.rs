//! Lexis command-line entry point

use clap::Parser;
use lexis_cli::commands::Commands;

/// Linguistic metrics for preprocessed documents
#[derive(Debug, Parser)]
#[command(name = "lexis", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "lexis", "analyze", "-i", "essays/*.json", "-f", "json", "--mattr-window", "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.input, vec!["essays/*.json"]);
                assert_eq!(args.mattr_window, Some(30));
                assert_eq!(args.lexicon, "de");
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }
}
