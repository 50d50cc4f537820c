//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Extract tables, statistics, metrics and timelines from research text.
#[derive(Debug, Parser)]
#[command(name = "research-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RESEARCH_EXTRACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source locator attached to extracted records
    #[arg(short, long, global = true, default_value = "")]
    pub source: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Terminal table (default)
    Table,
    /// JSON format
    Json,
    /// Markdown pipe tables
    Markdown,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tables and statistics
    All(InputArgs),

    /// Extract pipe-delimited tables
    Tables(InputArgs),

    /// Extract percentage and large-number statistics
    Stats(InputArgs),

    /// Extract dated events
    Timeline(InputArgs),

    /// Locate named metrics next to their values
    Metrics(MetricsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Input shared by extraction commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}

/// Arguments for the metrics command.
#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Text file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Metric name to look for (repeatable)
    #[arg(short, long = "metric", required = true)]
    pub metrics: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Markdown => crate::config::OutputFormat::Markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_metrics_command() {
        let cli = Cli::parse_from([
            "research-extract",
            "metrics",
            "report.txt",
            "-m",
            "销量",
            "--metric",
            "出口量",
        ]);
        match cli.command {
            Command::Metrics(args) => {
                assert_eq!(args.input, "report.txt");
                assert_eq!(args.metrics, vec!["销量", "出口量"]);
            }
            _ => panic!("Expected Metrics command"),
        }
    }

    #[test]
    fn test_metrics_requires_a_name() {
        let result = Cli::try_parse_from(["research-extract", "metrics", "report.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let cli = Cli::parse_from(["research-extract", "tables"]);
        match cli.command {
            Command::Tables(args) => assert_eq!(args.input, "-"),
            _ => panic!("Expected Tables command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "research-extract",
            "stats",
            "in.txt",
            "--format",
            "json",
            "--source",
            "https://example.com",
            "-vv",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.source, "https://example.com");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Markdown.into();
        assert_eq!(format, OutputFormat::Markdown);
    }
}
