//! Record types produced by extraction

use crate::error::ExtractorError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table row: column name to cell text, in column order
pub type Row = IndexMap<String, String>;

/// Header information attached to an extracted table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Column names in order
    pub headers: Vec<String>,

    /// Number of data rows
    pub row_count: usize,
}

/// A pipe-delimited table recovered from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Lines of the table block, joined with newlines
    pub raw_content: String,

    /// Data rows keyed by header
    #[serde(rename = "structured_data")]
    pub rows: Vec<Row>,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// Where the text came from (URL or empty)
    pub source_url: String,

    /// UNIX timestamp (seconds) of extraction
    pub extracted_at: u64,

    /// Headers and row count
    pub metadata: TableMetadata,
}

impl Table {
    /// Column names in order
    pub fn headers(&self) -> &[String] {
        &self.metadata.headers
    }

    /// Render the rows back into a Markdown table using the header order
    pub fn to_markdown(&self) -> String {
        crate::render::render_markdown_table(&self.rows, Some(self.metadata.headers.as_slice()))
    }
}

/// Value of a statistic: a plain number or a percentage as written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Numeric figure, unscaled
    Number(f64),
    /// Percentage text such as `35.2%`
    Percentage(String),
}

impl StatValue {
    /// The numeric figure, if this is a plain number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Percentage(_) => None,
        }
    }

    /// The percentage text, if this is a percentage
    pub fn as_percentage(&self) -> Option<&str> {
        match self {
            StatValue::Number(_) => None,
            StatValue::Percentage(p) => Some(p),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Percentage(p) => f.write_str(p),
        }
    }
}

/// A statistic found in running text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Inferred label; empty when none could be inferred
    pub name: String,

    /// The figure itself
    pub value: StatValue,

    /// Scale unit such as `万元`; empty when none follows the number
    pub unit: String,

    /// Reporting period; no heuristic fills this yet
    pub period: String,

    /// Where the text came from (URL or empty)
    pub source: String,

    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Which side of the value the metric name was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDirection {
    /// Metric name precedes the value
    Forward,
    /// Value precedes the metric name
    Backward,
}

/// A requested metric located next to a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    /// The metric name that was searched for
    pub metric: String,

    /// Matched value text (number, optionally with `%`)
    pub value: String,

    /// Character offset of the match start
    pub position: usize,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// Search direction that produced the match
    pub direction: MatchDirection,
}

impl KeyMetric {
    /// Flatten into a row for table rendering
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("metric".to_string(), self.metric.clone());
        row.insert("value".to_string(), self.value.clone());
        row.insert("position".to_string(), self.position.to_string());
        row.insert("confidence".to_string(), self.confidence.to_string());
        row
    }
}

/// A dated event found in running text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Date token as written, e.g. `2024年3月` or `Q1 2024`
    pub date: String,

    /// Text following the date token
    pub description: String,

    /// Character offset of the date token
    pub position: usize,
}

impl TimelineEvent {
    /// Flatten into a row for table rendering
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("date".to_string(), self.date.clone());
        row.insert("description".to_string(), self.description.clone());
        row.insert("position".to_string(), self.position.to_string());
        row
    }
}

/// Any record the extractor can produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum ExtractedRecord {
    /// A pipe table
    Table(Table),
    /// A percentage or large-number statistic
    Statistic(Statistic),
    /// A requested metric match
    KeyMetric(KeyMetric),
    /// A dated event
    TimelineEvent(TimelineEvent),
}

impl ExtractedRecord {
    /// Confidence of the record; timeline events carry none and report 1.0
    pub fn confidence(&self) -> f64 {
        match self {
            ExtractedRecord::Table(t) => t.confidence,
            ExtractedRecord::Statistic(s) => s.confidence,
            ExtractedRecord::KeyMetric(m) => m.confidence,
            ExtractedRecord::TimelineEvent(_) => 1.0,
        }
    }

    /// Key-value view suitable for report pipelines or JSON output
    pub fn to_value(&self) -> serde_json::Value {
        // Every variant is a plain struct of strings and finite numbers
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<Table> for ExtractedRecord {
    fn from(t: Table) -> Self {
        ExtractedRecord::Table(t)
    }
}

impl From<Statistic> for ExtractedRecord {
    fn from(s: Statistic) -> Self {
        ExtractedRecord::Statistic(s)
    }
}

impl From<KeyMetric> for ExtractedRecord {
    fn from(m: KeyMetric) -> Self {
        ExtractedRecord::KeyMetric(m)
    }
}

impl From<TimelineEvent> for ExtractedRecord {
    fn from(e: TimelineEvent) -> Self {
        ExtractedRecord::TimelineEvent(e)
    }
}

/// Tables and statistics from a single pass over a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Extracted tables
    pub tables: Vec<Table>,

    /// Extracted statistics
    pub statistics: Vec<Statistic>,

    /// `tables.len() + statistics.len()`
    pub extracted_count: usize,
}

impl ExtractionSummary {
    /// Build a summary, computing the count
    pub fn new(tables: Vec<Table>, statistics: Vec<Statistic>) -> Self {
        let extracted_count = tables.len() + statistics.len();
        Self {
            tables,
            statistics,
            extracted_count,
        }
    }

    /// Pretty-printed JSON document of the summary
    pub fn to_json(&self) -> Result<String, ExtractorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All records in the summary, tables first
    pub fn records(&self) -> Vec<ExtractedRecord> {
        self.tables
            .iter()
            .cloned()
            .map(ExtractedRecord::from)
            .chain(self.statistics.iter().cloned().map(ExtractedRecord::from))
            .collect()
    }
}
