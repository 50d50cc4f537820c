//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use research_extractor::{
    render_markdown_table, ExtractionSummary, KeyMetric, Row, Statistic, Table, TimelineEvent,
    METRICS_NOT_FOUND, METRICS_TABLE_COLUMNS,
};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format tables and statistics together.
    pub fn format_summary(&self, summary: &ExtractionSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(summary.to_json()?),
            OutputFormat::Markdown => Ok(format!(
                "## Tables\n\n{}\n\n## Statistics\n\n{}\n",
                self.format_tables(&summary.tables)?,
                self.format_statistics(&summary.statistics)?
            )),
            OutputFormat::Table => Ok(format!(
                "{}\n\n{}\n{}",
                self.format_tables(&summary.tables)?,
                self.format_statistics(&summary.statistics)?,
                self.info(&format!("{} records extracted", summary.extracted_count))
            )),
        }
    }

    /// Format extracted tables.
    pub fn format_tables(&self, tables: &[Table]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(tables)?);
        }
        if tables.is_empty() {
            return Ok(self.empty("No tables found."));
        }

        let sections: Vec<String> = tables
            .iter()
            .enumerate()
            .map(|(idx, table)| {
                let heading = format!(
                    "Table {} ({} rows, confidence {:.2})",
                    idx + 1,
                    table.rows.len(),
                    table.confidence
                );
                match self.format {
                    OutputFormat::Markdown => format!("**{}**\n\n{}", heading, table.to_markdown()),
                    _ => {
                        let headers: Vec<&str> = table.headers().iter().map(String::as_str).collect();
                        let rows = table
                            .rows
                            .iter()
                            .map(|row| {
                                headers
                                    .iter()
                                    .map(|h| row.get(*h).cloned().unwrap_or_default())
                                    .collect()
                            })
                            .collect();
                        format!("{}\n{}", self.colorize(&heading, "cyan"), grid(&headers, rows))
                    }
                }
            })
            .collect();

        Ok(sections.join("\n\n"))
    }

    /// Format statistics.
    pub fn format_statistics(&self, stats: &[Statistic]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(stats)?);
        }
        if stats.is_empty() {
            return Ok(self.empty("No statistics found."));
        }

        let headers = ["name", "value", "unit", "confidence"];
        let rows: Vec<Vec<String>> = stats
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    s.value.to_string(),
                    s.unit.clone(),
                    format!("{:.2}", s.confidence),
                ]
            })
            .collect();
        Ok(self.render(&headers, rows))
    }

    /// Format key-metric matches.
    pub fn format_metrics(&self, metrics: &[KeyMetric]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
            OutputFormat::Markdown if metrics.is_empty() => Ok(METRICS_NOT_FOUND.to_string()),
            OutputFormat::Markdown => {
                let rows: Vec<Row> = metrics.iter().map(KeyMetric::to_row).collect();
                Ok(render_markdown_table(&rows, Some(&METRICS_TABLE_COLUMNS[..])))
            }
            OutputFormat::Table if metrics.is_empty() => Ok(self.empty(METRICS_NOT_FOUND)),
            OutputFormat::Table => {
                let headers = ["metric", "value", "direction", "position", "confidence"];
                let rows = metrics
                    .iter()
                    .map(|m| {
                        vec![
                            m.metric.clone(),
                            m.value.clone(),
                            format!("{:?}", m.direction).to_lowercase(),
                            m.position.to_string(),
                            format!("{:.2}", m.confidence),
                        ]
                    })
                    .collect();
                Ok(grid(&headers, rows))
            }
        }
    }

    /// Format timeline events.
    pub fn format_timeline(&self, events: &[TimelineEvent]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(events)?);
        }
        if events.is_empty() {
            return Ok(self.empty("No timeline events found."));
        }

        let headers = ["date", "description", "position"];
        match self.format {
            OutputFormat::Markdown => {
                let rows: Vec<Row> = events.iter().map(TimelineEvent::to_row).collect();
                Ok(render_markdown_table(&rows, Some(&headers[..])))
            }
            _ => {
                let rows = events
                    .iter()
                    .map(|e| vec![e.date.clone(), e.description.clone(), e.position.to_string()])
                    .collect();
                Ok(grid(&headers, rows))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Markdown or terminal grid for plain string rows.
    fn render(&self, headers: &[&str], rows: Vec<Vec<String>>) -> String {
        match self.format {
            OutputFormat::Markdown => {
                let rows: Vec<Row> = rows
                    .into_iter()
                    .map(|cells| {
                        headers
                            .iter()
                            .map(|h| h.to_string())
                            .zip(cells)
                            .collect::<Row>()
                    })
                    .collect();
                render_markdown_table(&rows, Some(headers))
            }
            _ => grid(headers, rows),
        }
    }

    fn empty(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Table => self.colorize(message, "yellow"),
            _ => String::new(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Rounded terminal table with a centered header row.
fn grid(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
