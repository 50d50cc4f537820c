//! Extraction command implementations.

use crate::cli::{InputArgs, MetricsArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use research_extractor::Extractor;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read the command input from a file path, or stdin for `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    fs::read_to_string(input)
        .map_err(|e| CliError::InvalidInput(format!("Cannot read '{}': {}", input, e)))
}

/// Execute the all command.
pub fn execute_all(
    args: InputArgs,
    extractor: &Extractor,
    source: &str,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let summary = extractor.extract_all(&text, source);
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}

/// Execute the tables command.
pub fn execute_tables(
    args: InputArgs,
    extractor: &Extractor,
    source: &str,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let tables = extractor.extract_tables(&text, source);
    println!("{}", formatter.format_tables(&tables)?);
    Ok(())
}

/// Execute the stats command.
pub fn execute_stats(
    args: InputArgs,
    extractor: &Extractor,
    source: &str,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let stats = extractor.extract_statistics(&text, source);
    println!("{}", formatter.format_statistics(&stats)?);
    Ok(())
}

/// Execute the timeline command.
pub fn execute_timeline(
    args: InputArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let events = extractor.extract_timeline(&text);
    println!("{}", formatter.format_timeline(&events)?);
    Ok(())
}

/// Execute the metrics command.
pub fn execute_metrics(
    args: MetricsArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let names: Vec<&str> = args
        .metrics
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect();
    if names.is_empty() {
        return Err(CliError::InvalidInput(
            "At least one non-empty metric name is required".to_string(),
        ));
    }

    let text = read_input(&args.input)?;
    debug!("Looking up metrics {:?}", names);
    let metrics = extractor.extract_key_metrics(&text, &names);
    println!("{}", formatter.format_metrics(&metrics)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "出口量达到 120万辆".as_bytes()).unwrap();

        let text = read_input(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "出口量达到 120万辆");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input("/nonexistent/report.txt");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_metrics_rejects_blank_names() {
        let args = MetricsArgs {
            input: "/nonexistent/report.txt".to_string(),
            metrics: vec!["  ".to_string()],
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        let result = execute_metrics(args, &Extractor::default(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_tables_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "|a|b|\n|1|2|\n".as_bytes()).unwrap();

        let args = InputArgs {
            input: file.path().to_str().unwrap().to_string(),
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert!(execute_tables(args, &Extractor::default(), "", &formatter).is_ok());
    }
}
