//! Research Extractor
//!
//! Pulls structured data out of free-form research text using pattern
//! heuristics. Every record carries a confidence score in `[0, 1]`.
//!
//! # Overview
//!
//! - **Tables**: runs of `|`-delimited lines become header/row mappings
//! - **Statistics**: percentages and large figures with an inferred label and unit
//! - **Key metrics**: caller-named metrics located next to a value
//! - **Timeline**: dated events in text order, one per distinct date
//! - **Rendering**: row mappings back to a Markdown pipe table
//!
//! Extraction never fails. Unparsable tokens are skipped and an input with
//! nothing recognizable yields empty results.
//!
//! # Example Usage
//!
//! ```
//! use research_extractor::{Extractor, StatValue};
//!
//! let extractor = Extractor::default();
//! let stats = extractor.extract_statistics("市场渗透率达到 35.2%", "");
//!
//! assert_eq!(stats[0].value, StatValue::Percentage("35.2%".to_string()));
//! assert_eq!(stats[0].name, "市场渗透率");
//!
//! let events = extractor.extract_timeline("2024年3月，新能源汽车下乡政策启动");
//! assert_eq!(events[0].date, "2024年3月");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod metrics;
mod patterns;
mod render;
mod statistics;
mod table;
mod text;
mod timeline;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{Extractor, METRICS_NOT_FOUND, METRICS_TABLE_COLUMNS};
pub use metrics::{BACKWARD_CONFIDENCE, FORWARD_CONFIDENCE};
pub use render::render_markdown_table;
pub use statistics::{LARGE_NUMBER_CONFIDENCE, PERCENTAGE_CONFIDENCE};
pub use table::{MULTI_ROW_CONFIDENCE, SINGLE_ROW_CONFIDENCE};
pub use types::{
    ExtractedRecord, ExtractionSummary, KeyMetric, MatchDirection, Row, StatValue, Statistic,
    Table, TableMetadata, TimelineEvent,
};

/// Extract tables and statistics with the default configuration
pub fn extract_all(text: &str, source_url: &str) -> ExtractionSummary {
    Extractor::default().extract_all(text, source_url)
}

/// Extract the named metrics with the default configuration and render them
/// as a Markdown table, or [`METRICS_NOT_FOUND`] when nothing matched
pub fn extract_metrics_table<S: AsRef<str>>(text: &str, metric_names: &[S]) -> String {
    Extractor::default().metrics_table(text, metric_names)
}
