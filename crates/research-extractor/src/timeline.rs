//! Dated events

use crate::config::ExtractorConfig;
use crate::patterns::DATE_PATTERNS;
use crate::text::CharIndex;
use crate::types::TimelineEvent;
use std::collections::HashSet;

/// Collect events for every date token, ordered by position, one per distinct token.
///
/// Each date shape is scanned over the whole text, so `2024年3月` also yields
/// `2024年` at the same position. Ties keep pattern order.
pub(crate) fn extract_timeline(text: &str, config: &ExtractorConfig) -> Vec<TimelineEvent> {
    let index = CharIndex::new(text);
    let mut events = Vec::new();

    for pattern in DATE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(token) = caps.get(1) else {
                continue;
            };
            let position = index.char_pos(token.start());
            let window = index.window(
                token.start(),
                token.end(),
                config.timeline_window_before,
                config.timeline_window_after,
            );
            let lead = position.min(config.timeline_window_before);

            events.push(TimelineEvent {
                date: token.as_str().to_string(),
                description: describe(window, lead, config.timeline_description_len),
                position,
            });
        }
    }

    events.sort_by_key(|event| event.position);

    let mut seen = HashSet::new();
    events.retain(|event| seen.insert(event.date.clone()));
    events
}

/// The character at `lead` plus up to `len` more, stopping at a newline or `。`
fn describe(window: &str, lead: usize, len: usize) -> String {
    let mut chars = window.chars().skip(lead);
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut description = String::from(first);
    description.extend(chars.take_while(|c| *c != '\n' && *c != '。').take(len));
    description.trim().to_string()
}
