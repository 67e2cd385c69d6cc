// tests/integration_tests/metrics_test.rs
use super::common::SAMPLE;
use std::num::NonZeroUsize;
use textlens::{
    DEFAULT_WORDS_PER_MINUTE, EngineOptions, Metrics, WordMode, analyze, compute_frequency_table,
    compute_metrics,
};

#[test]
fn test_sample_sentence_metrics() {
    let metrics = compute_metrics(SAMPLE, &EngineOptions::default());
    assert_eq!(metrics.char_count, SAMPLE.chars().count());
    assert_eq!(metrics.char_count, 25);
    assert_eq!(metrics.word_count, 5);
    assert_eq!(metrics.sentence_count, 2);
    assert_eq!(metrics.reading_minutes, 1);
}

#[test]
fn test_empty_text_is_zeroed() {
    let analysis = analyze("", &EngineOptions::default());
    assert_eq!(
        analysis.metrics,
        Metrics {
            char_count: 0,
            word_count: 0,
            sentence_count: 0,
            reading_minutes: 0,
        }
    );
    assert!(analysis.frequency.is_empty());
    assert!(!analysis.frequency.has_characters(), "no characters sentinel");
}

#[test]
fn test_punctuation_only_text() {
    let strict = compute_metrics("?! -- ...", &EngineOptions::default());
    assert_eq!(strict.word_count, 0);
    assert_eq!(strict.sentence_count, 1, "'--' sits between terminators");
    assert_eq!(
        strict.reading_minutes, 1,
        "reading time counts whitespace tokens in every word mode"
    );

    let loose = compute_metrics(
        "?! -- ...",
        &EngineOptions::new(DEFAULT_WORDS_PER_MINUTE, WordMode::Whitespace),
    );
    assert_eq!(loose.word_count, 3);
    assert_eq!(loose.reading_minutes, 1);
}

#[test]
fn test_reading_time_rounds_up_at_boundary() {
    let options = EngineOptions::default();
    let two_hundred = "word ".repeat(200);
    let two_hundred_one = "word ".repeat(201);
    assert_eq!(compute_metrics(&two_hundred, &options).reading_minutes, 1);
    assert_eq!(compute_metrics(&two_hundred_one, &options).reading_minutes, 2);
}

#[test]
fn test_custom_reading_speed() {
    let wpm = NonZeroUsize::new(2).expect("non-zero");
    let options = EngineOptions::new(wpm, WordMode::Strict);
    assert_eq!(compute_metrics("one two three", &options).reading_minutes, 2);
}

#[test]
fn test_frequency_counts_only_ascii_letters() {
    let text = "Naïve café, 2024 — ÀB!";
    let table = compute_frequency_table(text);
    assert_eq!(
        table.total_letters(),
        text.chars().filter(char::is_ascii_alphabetic).count()
    );
    assert_eq!(table.count('b'), 1);
    assert_eq!(table.count('a'), 2, "'À' is not an ASCII letter");
    assert_eq!(table.total_chars(), text.chars().count());
}
