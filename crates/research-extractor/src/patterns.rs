//! Regular expressions shared by the extraction passes

use once_cell::sync::Lazy;
use regex::Regex;

/// A percentage, optionally followed by a connective word or punctuation
pub(crate) static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?%)\s*(?:，|,|\.|的|是|为|达到|增长|下降)?").unwrap()
});

/// A signed number with optional thousands separators, decimals and `%`
pub(crate) static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([-+]?\d{1,3}(?:,\d{3})*(?:\.\d+)?%?\s*)").unwrap());

/// Date shapes, scanned independently and in this order
pub(crate) static DATE_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"(\d{4}年\d{1,2}月)").unwrap(),
        Regex::new(r"(\d{4}年)").unwrap(),
        Regex::new(r"(\d{4}[-/]\d{1,2}[-/]\d{1,2})").unwrap(),
        Regex::new(r"(Q[1-4]\s*\d{4})").unwrap(),
    ]
});

/// Pattern for a short label right before a connective word or `anchor`
fn name_pattern(anchor: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"([^\s\d，,。]{{2,10}})(?:的|是|为|达到|{})",
        regex::escape(anchor)
    ))
}

/// Infer a statistic's label from the text around it
pub(crate) fn infer_name(context: &str, anchor: &str) -> Option<String> {
    let pattern = name_pattern(anchor).ok()?;
    let caps = pattern.captures(context)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

/// Metric name followed by a value within `span` characters of the same sentence
pub(crate) fn forward_metric_pattern(metric: &str, span: usize) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"{}[^\n。]{{0,{}}}?(\d+(?:\.\d+)?%?)",
        regex::escape(metric),
        span
    ))
}

/// Value followed by a metric name within `span` characters of the same sentence
pub(crate) fn backward_metric_pattern(metric: &str, span: usize) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(\d+(?:\.\d+)?%?)[^\n。]{{0,{}}}?{}",
        span,
        regex::escape(metric)
    ))
}
