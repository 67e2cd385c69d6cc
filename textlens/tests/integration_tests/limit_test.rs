// tests/integration_tests/limit_test.rs
use textlens::{LimitConfig, LimitValue, evaluate_limit, parse_limit};

#[test]
fn test_limit_exceeded_message_names_the_limit() {
    let status = evaluate_limit(101, &LimitConfig::new(true, "100"));
    assert!(status.exceeded);
    assert!(status.message.contains("100"));
}

#[test]
fn test_non_numeric_limit_never_exceeds() {
    let config = LimitConfig::new(true, "abc");
    assert_eq!(config.limit, LimitValue::Invalid);
    let status = evaluate_limit(101, &config);
    assert!(!status.exceeded);
    assert!(status.message.is_empty());
}

#[test]
fn test_threshold_crossing_is_immediate() {
    let config = LimitConfig::new(true, "10");
    let results: Vec<bool> = [9, 10, 11, 10, 12, 0]
        .into_iter()
        .map(|count| evaluate_limit(count, &config).exceeded)
        .collect();
    assert_eq!(results, vec![false, false, true, false, true, false]);
}

#[test]
fn test_disabled_limit_is_ignored() {
    assert!(!evaluate_limit(1_000, &LimitConfig::new(false, "1")).exceeded);
}

#[test]
fn test_lenient_parsing() {
    assert_eq!(parse_limit(" 280 characters"), LimitValue::Valid(280));
    assert_eq!(parse_limit("characters: 280"), LimitValue::Invalid);
}

#[test]
fn test_negative_limit_is_always_exceeded_when_enabled() {
    let status = evaluate_limit(0, &LimitConfig::new(true, "-1"));
    assert!(status.exceeded);
    assert!(status.message.contains("-1"));
}
