//! Percentage and large-number statistics

use crate::config::ExtractorConfig;
use crate::patterns::{infer_name, NUMBER, PERCENTAGE};
use crate::text::CharIndex;
use crate::types::{StatValue, Statistic};
use tracing::debug;

/// Confidence of a percentage statistic
pub const PERCENTAGE_CONFIDENCE: f64 = 0.8;

/// Confidence of a large-number statistic
pub const LARGE_NUMBER_CONFIDENCE: f64 = 0.75;

/// Unit markers checked after a number, first hit wins.
///
/// `万` is tested before `百万` and `千万`, so those two never win.
const UNIT_MARKERS: [(&str, &str); 4] = [
    ("亿", "亿元"),
    ("万", "万元"),
    ("百万", "百万"),
    ("千万", "千万"),
];

/// Run the percentage pass, then the large-number pass
pub(crate) fn extract_statistics(
    text: &str,
    source: &str,
    config: &ExtractorConfig,
) -> Vec<Statistic> {
    let index = CharIndex::new(text);
    let mut statistics = percentages(text, source, &index, config);
    statistics.extend(large_numbers(text, source, &index, config));
    statistics
}

fn percentages(
    text: &str,
    source: &str,
    index: &CharIndex<'_>,
    config: &ExtractorConfig,
) -> Vec<Statistic> {
    PERCENTAGE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let percentage = caps.get(1)?.as_str();
            let context = index.window(
                whole.start(),
                whole.end(),
                config.context_window,
                config.context_window,
            );

            Some(Statistic {
                name: infer_name(context, percentage).unwrap_or_default(),
                value: StatValue::Percentage(percentage.to_string()),
                unit: String::new(),
                period: String::new(),
                source: source.to_string(),
                confidence: PERCENTAGE_CONFIDENCE,
            })
        })
        .collect()
}

fn large_numbers(
    text: &str,
    source: &str,
    index: &CharIndex<'_>,
    config: &ExtractorConfig,
) -> Vec<Statistic> {
    let mut statistics = Vec::new();

    for found in NUMBER.find_iter(text) {
        let token = found.as_str().trim();
        if token.contains('%') {
            continue;
        }

        let value: f64 = match token.replace(',', "").parse() {
            Ok(v) => v,
            Err(_) => {
                debug!("Skipping unparsable number token '{}'", token);
                continue;
            }
        };

        if value < config.large_number_threshold {
            continue;
        }

        let lookahead = index.following(found.end(), config.unit_lookahead);
        let unit = UNIT_MARKERS
            .iter()
            .find(|(marker, _)| lookahead.contains(marker))
            .map(|(_, unit)| *unit)
            .unwrap_or("");

        let context = index.window(
            found.start(),
            found.end(),
            config.context_window,
            config.context_window,
        );
        let anchor = crate::text::truncate_chars(token, 10);

        // Unlike percentages, unnamed large numbers are not reported
        let Some(name) = infer_name(context, anchor) else {
            debug!("No label found for number '{}'", token);
            continue;
        };

        statistics.push(Statistic {
            name,
            value: StatValue::Number(value),
            unit: unit.to_string(),
            period: String::new(),
            source: source.to_string(),
            confidence: LARGE_NUMBER_CONFIDENCE,
        });
    }

    statistics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Statistic> {
        extract_statistics(text, "", &ExtractorConfig::default())
    }

    #[test]
    fn test_percentage_with_connective_name() {
        let stats = run("市场渗透率达到 35.2%");
        let pct: Vec<_> = stats
            .iter()
            .filter(|s| s.value == StatValue::Percentage("35.2%".into()))
            .collect();
        assert_eq!(pct.len(), 1);
        assert_eq!(pct[0].confidence, PERCENTAGE_CONFIDENCE);
        assert!(pct[0].name.contains("渗透率"));
        assert!(pct[0].unit.is_empty());
    }

    #[test]
    fn test_percentage_without_name_still_reported() {
        let stats = run("35%");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "");
        assert_eq!(stats[0].value.as_percentage(), Some("35%"));
    }

    #[test]
    fn test_large_number_with_wan_unit() {
        let stats = run("总产值达到12,000万元");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].value, StatValue::Number(12000.0));
        assert_eq!(stats[0].unit, "万元");
        assert_eq!(stats[0].name, "总产值达到");
        assert_eq!(stats[0].confidence, LARGE_NUMBER_CONFIDENCE);
    }

    #[test]
    fn test_unit_does_not_lift_small_numbers() {
        assert!(run("总销量达到700万辆").is_empty());
        assert!(run("营收为9,999亿元").is_empty());
    }

    #[test]
    fn test_unparsable_number_skipped() {
        let stats = run("销量是１２,０００");
        assert!(stats.iter().all(|s| s.value.as_number().is_none()));
    }

    #[test]
    fn test_yi_takes_priority() {
        let stats = run("营收为12,000亿元，较上年增加万");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].unit, "亿元");
        assert_eq!(stats[0].name, "营收为");
        assert_eq!(stats[0].value, StatValue::Number(12000.0));
    }

    #[test]
    fn test_grouped_number_without_unit() {
        let stats = run("年产量是 25,000 吨");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].value, StatValue::Number(25000.0));
        assert_eq!(stats[0].unit, "");
        assert_eq!(stats[0].name, "年产量");
    }

    #[test]
    fn test_small_numbers_never_reported() {
        let stats = run("销量达到 9,999 辆，库存为 512 台，价格是 2024");
        assert!(stats.is_empty());
    }

    #[test]
    fn test_unnamed_large_number_dropped() {
        assert!(run("  25,000  ").is_empty());
    }

    #[test]
    fn test_source_attached() {
        let stats = extract_statistics("增长 5%", "https://example.com", &ExtractorConfig::default());
        assert_eq!(stats[0].source, "https://example.com");
    }

    #[test]
    fn test_configured_threshold() {
        let config = ExtractorConfig {
            large_number_threshold: 100.0,
            ..ExtractorConfig::default()
        };
        let stats = extract_statistics("库存为512台", "", &config);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].value, StatValue::Number(512.0));
    }
}
