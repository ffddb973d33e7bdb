use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_matches_widget_latency() {
    let timing = ReplyTiming::default();
    assert_eq!(timing.remote_min_ms, 800);
    assert_eq!(timing.remote_max_ms, 2000);
    assert_eq!(timing.fallback_delay(), Duration::from_millis(1000));
}

#[test]
fn remote_delay_stays_in_half_open_range() {
    let timing = ReplyTiming::default();
    for _ in 0..500 {
        let delay = timing.remote_delay();
        assert!(delay >= Duration::from_millis(800), "{delay:?}");
        assert!(delay < Duration::from_millis(2000), "{delay:?}");
    }
}

#[test]
fn immediate_has_no_latency() {
    let timing = ReplyTiming::immediate();
    assert_eq!(timing.remote_delay(), Duration::ZERO);
    assert_eq!(timing.fallback_delay(), Duration::ZERO);
}

#[test]
fn degenerate_range_uses_min() {
    let timing = ReplyTiming { remote_min_ms: 50, remote_max_ms: 50, fallback_ms: 0 };
    assert_eq!(timing.remote_delay(), Duration::from_millis(50));
}

#[test]
fn from_lookup_defaults() {
    assert_eq!(ReplyTiming::from_lookup(lookup_from(&[])), ReplyTiming::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let timing = ReplyTiming::from_lookup(lookup_from(&[
        ("CHAT_REPLY_MIN_DELAY_MS", "10"),
        ("CHAT_REPLY_MAX_DELAY_MS", "20"),
        ("CHAT_FALLBACK_DELAY_MS", "5"),
    ]));
    assert_eq!(timing, ReplyTiming { remote_min_ms: 10, remote_max_ms: 20, fallback_ms: 5 });
}

#[test]
fn from_lookup_clamps_inverted_range() {
    let timing = ReplyTiming::from_lookup(lookup_from(&[
        ("CHAT_REPLY_MIN_DELAY_MS", "500"),
        ("CHAT_REPLY_MAX_DELAY_MS", "100"),
    ]));
    assert_eq!(timing.remote_min_ms, 500);
    assert_eq!(timing.remote_max_ms, 500);
}
