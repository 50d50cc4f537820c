//! Lookup of caller-named metrics

use crate::config::ExtractorConfig;
use crate::patterns::{backward_metric_pattern, forward_metric_pattern};
use crate::text::CharIndex;
use crate::types::{KeyMetric, MatchDirection};
use regex::Regex;
use tracing::{debug, warn};

/// Confidence when the value follows the metric name
pub const FORWARD_CONFIDENCE: f64 = 0.85;

/// Confidence when the value precedes the metric name
pub const BACKWARD_CONFIDENCE: f64 = 0.8;

/// Find each metric next to a value, searching both directions.
///
/// Each direction contributes at most one match per metric (the first in
/// the text); both may fire for the same metric.
pub(crate) fn extract_key_metrics<S: AsRef<str>>(
    text: &str,
    metrics: &[S],
    config: &ExtractorConfig,
) -> Vec<KeyMetric> {
    let index = CharIndex::new(text);
    let mut results = Vec::new();

    for metric in metrics {
        let metric: &str = metric.as_ref();
        if metric.is_empty() {
            debug!("Skipping empty metric name");
            continue;
        }

        let forward = forward_metric_pattern(metric, config.metric_forward_span);
        results.extend(first_match(
            text,
            &index,
            metric,
            forward,
            MatchDirection::Forward,
        ));

        let backward = backward_metric_pattern(metric, config.metric_backward_span);
        results.extend(first_match(
            text,
            &index,
            metric,
            backward,
            MatchDirection::Backward,
        ));
    }

    results
}

fn first_match(
    text: &str,
    index: &CharIndex<'_>,
    metric: &str,
    pattern: Result<Regex, regex::Error>,
    direction: MatchDirection,
) -> Option<KeyMetric> {
    let pattern = match pattern {
        Ok(p) => p,
        Err(e) => {
            warn!("Cannot search for metric '{}': {}", metric, e);
            return None;
        }
    };

    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?;

    let confidence = match direction {
        MatchDirection::Forward => FORWARD_CONFIDENCE,
        MatchDirection::Backward => BACKWARD_CONFIDENCE,
    };

    Some(KeyMetric {
        metric: metric.to_string(),
        value: value.as_str().to_string(),
        position: index.char_pos(whole.start()),
        confidence,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, metrics: &[&str]) -> Vec<KeyMetric> {
        extract_key_metrics(text, metrics, &ExtractorConfig::default())
    }

    #[test]
    fn test_forward_match() {
        let results = run("今年销量达到120万辆", &["销量"]);
        let forward: Vec<_> = results
            .iter()
            .filter(|m| m.direction == MatchDirection::Forward)
            .collect();
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].value, "120");
        assert_eq!(forward[0].confidence, FORWARD_CONFIDENCE);
        assert_eq!(forward[0].position, 2);
        assert_eq!(forward[0].metric, "销量");
    }

    #[test]
    fn test_backward_match() {
        let results = run("同比增长35.2%的渗透率", &["渗透率"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].direction, MatchDirection::Backward);
        assert_eq!(results[0].value, "35.2%");
        assert_eq!(results[0].position, 4);
        assert_eq!(results[0].confidence, BACKWARD_CONFIDENCE);
    }

    #[test]
    fn test_both_directions() {
        let results = run("出口量达到120万辆。另有99万辆出口量", &["出口量"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].direction, MatchDirection::Forward);
        assert_eq!(results[0].value, "120");
        assert_eq!(results[0].position, 0);
        assert_eq!(results[1].direction, MatchDirection::Backward);
        assert_eq!(results[1].value, "99");
        assert_eq!(results[1].position, 13);
    }

    #[test]
    fn test_sentence_boundary_blocks_match() {
        assert!(run("销量。120", &["销量"]).is_empty());
        assert!(run("销量\n120", &["销量"]).is_empty());
    }

    #[test]
    fn test_forward_span_limit() {
        let gap = "很".repeat(51);
        assert!(run(&format!("销量{}120", gap), &["销量"]).is_empty());
        let gap = "很".repeat(50);
        assert_eq!(run(&format!("销量{}120", gap), &["销量"]).len(), 1);
    }

    #[test]
    fn test_missing_metric() {
        assert!(run("销量达到120万辆", &["利润"]).is_empty());
        assert!(run("销量达到120万辆", &[""]).is_empty());
    }

    #[test]
    fn test_metric_names_are_literal() {
        let results = run("利润(亿元)为45.6", &["利润(亿元)"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "45.6");
    }
}
