//! research-extract - pull tables, statistics, metrics and timelines out of research text.

use anyhow::Context;
use clap::Parser;
use research_cli::commands;
use research_cli::{Cli, Command, Config, Formatter};
use research_extractor::Extractor;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let fallback = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let extractor =
        Extractor::new(config.extractor.clone()).context("invalid extractor configuration")?;
    let source = cli.source.as_str();

    match cli.command {
        Command::All(args) => commands::execute_all(args, &extractor, source, &formatter)?,
        Command::Tables(args) => commands::execute_tables(args, &extractor, source, &formatter)?,
        Command::Stats(args) => commands::execute_stats(args, &extractor, source, &formatter)?,
        Command::Timeline(args) => commands::execute_timeline(args, &extractor, &formatter)?,
        Command::Metrics(args) => commands::execute_metrics(args, &extractor, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?
        }
    }

    Ok(())
}
