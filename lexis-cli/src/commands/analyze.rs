//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::lexicon_source::LexiconSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use lexis_core::{DocumentAnalyzer, DocumentMetrics, Error, MetricsConfig};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input document files, directories or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded lexicon code
    #[arg(short, long, value_name = "CODE", default_value = "de")]
    pub lexicon: String,

    /// External lexicon TOML file (overrides --lexicon)
    #[arg(long, value_name = "FILE")]
    pub lexicon_file: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// MTLD type-token ratio threshold
    #[arg(long, value_name = "RATIO")]
    pub mtld_threshold: Option<f64>,

    /// MATTR window length in tokens
    #[arg(long, value_name = "TOKENS")]
    pub mattr_window: Option<usize>,

    /// Sentences with fewer words count as short
    #[arg(long, value_name = "WORDS")]
    pub short_lt: Option<usize>,

    /// Sentences with more words count as long
    #[arg(long, value_name = "WORDS")]
    pub long_gt: Option<usize>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Suppress progress output and all log messages but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block per document
    Text,
    /// JSON array of metric records
    Json,
    /// Markdown table with one row per document
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name accepted by `--format`
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Human-readable block per document",
            OutputFormat::Json => "JSON array of metric records (pretty or --compact)",
            OutputFormat::Markdown => "Markdown table with one row per document",
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting document analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = self.load_config()?;
        let metrics_config = self.metrics_config(&cli_config)?;

        let source = LexiconSource::from_args(&self.lexicon, self.lexicon_file.as_ref());
        log::info!("Using lexicon: {}", source.display_name());
        let lexicon = source.load()?;
        let analyzer = DocumentAnalyzer::new(lexicon, metrics_config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to analyze", files.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count(&cli_config)?)
            .build()
            .context("Failed to create worker pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let outcomes: Vec<Result<DocumentMetrics>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let outcome = analyze_file(&analyzer, path);
                    progress.file_completed(&path.display().to_string());
                    outcome
                })
                .collect()
        });
        progress.finish();

        let mut formatter = self.create_formatter(&cli_config)?;
        let mut failed = 0;
        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(metrics) => formatter.format_document(&metrics)?,
                Err(e) => {
                    failed += 1;
                    log::error!("Skipping {}: {:#}", path.display(), e);
                }
            }
        }
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::ProcessingError(format!(
                "{failed} of {} documents failed",
                files.len()
            ))
            .into());
        }

        log::info!("Analyzed {} documents", files.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        // quiet keeps rejected documents visible
        let log_level = match self.verbose {
            _ if self.quiet => "error",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a logger may already be installed when running in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();

        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                log::info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Config file values overridden by command-line flags
    fn metrics_config(&self, config: &CliConfig) -> Result<MetricsConfig> {
        let mut metrics = config.metrics.clone();
        if let Some(threshold) = self.mtld_threshold {
            metrics.mtld_threshold = threshold;
        }
        if let Some(window) = self.mattr_window {
            metrics.mattr_window = window;
        }
        if let Some(short_lt) = self.short_lt {
            metrics.short_sentence_lt = short_lt;
        }
        if let Some(long_gt) = self.long_gt {
            metrics.long_sentence_gt = long_gt;
        }

        metrics.validate()?;
        Ok(metrics)
    }

    fn thread_count(&self, config: &CliConfig) -> Result<usize> {
        let threads = match self.threads {
            Some(0) => {
                return Err(CliError::ConfigError("--threads must be at least 1".into()).into())
            }
            Some(n) => n,
            None if config.performance.worker_threads > 0 => config.performance.worker_threads,
            None => num_cpus::get(),
        };
        Ok(threads)
    }

    fn create_formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let list_connectors = config.output.list_connectors;
        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_connector_list(list_connectors))
            }
            OutputFormat::Json if self.compact || !config.output.pretty_json => {
                Box::new(JsonFormatter::new(writer).compact())
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new(writer).with_connector_list(list_connectors))
            }
        };

        Ok(formatter)
    }
}

/// Read, validate and analyze one document file
fn analyze_file(analyzer: &DocumentAnalyzer, path: &Path) -> Result<DocumentMetrics> {
    let document = FileReader::read_document(path)?;
    log::debug!("Analyzing {} ({})", path.display(), document.display_id());

    analyzer.analyze(&document).map_err(|e| match e {
        Error::InvalidDocument(reason) => CliError::InvalidDocument {
            path: path.display().to_string(),
            reason,
        }
        .into(),
        other => anyhow::Error::from(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> AnalyzeArgs {
        AnalyzeArgs {
            input,
            output: None,
            format: OutputFormat::Json,
            lexicon: "de".to_string(),
            lexicon_file: None,
            config: None,
            mtld_threshold: None,
            mattr_window: None,
            short_lt: None,
            long_gt: None,
            threads: Some(2),
            compact: false,
            quiet: true,
            verbose: 0,
        }
    }

    const DOCUMENT: &str = r#"{
        "sentences": ["Es regnet, aber wir gehen."],
        "words": ["Es", "regnet", "aber", "wir", "gehen"],
        "tokens": [
            {"lemma": "es", "pos": "PRON"},
            {"lemma": "regnen", "pos": "VERB"},
            {"lemma": "aber", "pos": "CCONJ"},
            {"lemma": "wir", "pos": "PRON"},
            {"lemma": "gehen", "pos": "VERB"}
        ]
    }"#;

    #[test]
    fn test_flags_override_config() {
        let mut analyze = args(vec![]);
        analyze.mattr_window = Some(10);
        analyze.short_lt = Some(3);

        let mut config = CliConfig::default();
        config.metrics.mattr_window = 80;
        config.metrics.long_sentence_gt = 40;

        let metrics = analyze.metrics_config(&config).unwrap();
        assert_eq!(metrics.mattr_window, 10);
        assert_eq!(metrics.short_sentence_lt, 3);
        assert_eq!(metrics.long_sentence_gt, 40);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut analyze = args(vec![]);
        analyze.mtld_threshold = Some(1.5);

        let err = analyze.metrics_config(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("mtld_threshold"));
    }

    #[test]
    fn test_thread_count() {
        let mut analyze = args(vec![]);
        let mut config = CliConfig::default();
        assert_eq!(analyze.thread_count(&config).unwrap(), 2);

        analyze.threads = None;
        config.performance.worker_threads = 3;
        assert_eq!(analyze.thread_count(&config).unwrap(), 3);

        config.performance.worker_threads = 0;
        assert_eq!(analyze.thread_count(&config).unwrap(), num_cpus::get());

        analyze.threads = Some(0);
        assert!(analyze.thread_count(&config).is_err());
    }

    #[test]
    fn test_execute_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("essay_0007.json"), DOCUMENT).unwrap();
        let report = temp_dir.path().join("report.json");

        let mut analyze = args(vec![temp_dir.path().join("*.json").display().to_string()]);
        analyze.output = Some(report.clone());
        analyze.execute().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(value[0]["id"], "0007");
        assert_eq!(value[0]["connectors"]["coordinating_count"], 1);
    }

    #[test]
    fn test_execute_reports_rejected_documents() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("good_1.json"), DOCUMENT).unwrap();
        fs::write(
            temp_dir.path().join("bad_2.json"),
            r#"{"sentences": ["Hallo."], "words": ["Hallo", "Welt"], "tokens": [{"lemma": "hallo", "pos": "INTJ"}]}"#,
        )
        .unwrap();
        let report = temp_dir.path().join("report.json");

        let mut analyze = args(vec![temp_dir.path().join("*_*.json").display().to_string()]);
        analyze.output = Some(report.clone());

        let err = analyze.execute().unwrap_err();
        assert_eq!(err.to_string(), "Processing error: 1 of 2 documents failed");

        // the valid document is still reported
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "1");
    }

    #[test]
    fn test_analyze_file_rejection_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"sentences": [], "words": ["A"], "tokens": [{"lemma": "A", "pos": "DET"}]}"#,
        )
        .unwrap();

        let analyzer = DocumentAnalyzer::for_lexicon("de", MetricsConfig::default()).unwrap();
        let err = analyze_file(&analyzer, &path).unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidDocument { path: p, .. }) => assert!(p.ends_with("bad.json")),
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let mut analyze = args(vec![]);
        analyze.config = Some(PathBuf::from("/nonexistent/lexis.toml"));

        let err = analyze.load_config().unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_format_names() {
        let names: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["text", "json", "markdown"]);
    }
}
