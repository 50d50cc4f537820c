//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::render::render_markdown_table;
use crate::text::truncate_chars;
use crate::types::{
    ExtractedRecord, ExtractionSummary, KeyMetric, Row, Statistic, Table, TimelineEvent,
};
use crate::{metrics, statistics, table, timeline};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Placeholder returned by [`Extractor::metrics_table`] when no metric matched
pub const METRICS_NOT_FOUND: &str = "未找到相关指标";

/// Columns used by [`Extractor::metrics_table`]
pub const METRICS_TABLE_COLUMNS: [&str; 3] = ["metric", "value", "confidence"];

/// Pulls tables, statistics, metrics and dated events out of free text.
///
/// The extractor keeps no state between calls; every method scans the text
/// it is given and returns fresh records.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract pipe-delimited tables
    pub fn extract_tables(&self, text: &str, source_url: &str) -> Vec<Table> {
        let text = self.bounded(text);
        let tables = table::extract_tables(text, source_url, unix_now());
        debug!("Found {} tables", tables.len());
        tables
    }

    /// Extract percentage and large-number statistics
    pub fn extract_statistics(&self, text: &str, source_url: &str) -> Vec<Statistic> {
        let text = self.bounded(text);
        let stats = statistics::extract_statistics(text, source_url, &self.config);
        debug!("Found {} statistics", stats.len());
        stats
    }

    /// Locate each named metric next to a value
    pub fn extract_key_metrics<S: AsRef<str>>(&self, text: &str, metric_names: &[S]) -> Vec<KeyMetric> {
        let text = self.bounded(text);
        let found = metrics::extract_key_metrics(text, metric_names, &self.config);
        debug!(
            "Matched {} key metrics for {} names",
            found.len(),
            metric_names.len()
        );
        found
    }

    /// Extract dated events, ordered by position, one per distinct date
    pub fn extract_timeline(&self, text: &str) -> Vec<TimelineEvent> {
        let text = self.bounded(text);
        let events = timeline::extract_timeline(text, &self.config);
        debug!("Found {} timeline events", events.len());
        events
    }

    /// Extract tables and statistics in one pass
    pub fn extract_all(&self, text: &str, source_url: &str) -> ExtractionSummary {
        info!(
            "Starting extraction for source '{}', text length {} chars",
            source_url,
            text.chars().count()
        );

        let summary = ExtractionSummary::new(
            self.extract_tables(text, source_url),
            self.extract_statistics(text, source_url),
        );

        info!(
            "Extraction complete: {} tables, {} statistics",
            summary.tables.len(),
            summary.statistics.len()
        );
        summary
    }

    /// Every kind of record the text yields, including the named metrics
    pub fn extract_records<S: AsRef<str>>(
        &self,
        text: &str,
        source_url: &str,
        metric_names: &[S],
    ) -> Vec<ExtractedRecord> {
        let mut records: Vec<ExtractedRecord> = Vec::new();
        records.extend(self.extract_tables(text, source_url).into_iter().map(Into::into));
        records.extend(self.extract_statistics(text, source_url).into_iter().map(Into::into));
        records.extend(self.extract_key_metrics(text, metric_names).into_iter().map(Into::into));
        records.extend(self.extract_timeline(text).into_iter().map(Into::into));
        records
    }

    /// Extract the named metrics and render them as a Markdown table.
    ///
    /// Returns [`METRICS_NOT_FOUND`] when nothing matched.
    pub fn metrics_table<S: AsRef<str>>(&self, text: &str, metric_names: &[S]) -> String {
        let found = self.extract_key_metrics(text, metric_names);
        if found.is_empty() {
            return METRICS_NOT_FOUND.to_string();
        }

        let rows: Vec<Row> = found.iter().map(KeyMetric::to_row).collect();
        render_markdown_table(&rows, Some(&METRICS_TABLE_COLUMNS[..]))
    }

    fn bounded<'a>(&self, text: &'a str) -> &'a str {
        let bounded = truncate_chars(text, self.config.max_text_length);
        if bounded.len() < text.len() {
            warn!(
                "Text exceeds {} chars, scanning only the leading part",
                self.config.max_text_length
            );
        }
        bounded
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
