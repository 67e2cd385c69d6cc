// src/core/metrics.rs
mod frequency;
mod tokenize;

use std::num::NonZeroUsize;
use tracing::trace;

use crate::models::{Analysis, EngineOptions, Metrics, WordMode};

pub use frequency::compute_frequency_table;
pub use tokenize::{count_sentences, count_words, is_word_token};

/// Computes the scalar statistics for a text snapshot.
///
/// Every call recomputes from scratch; nothing is retained between calls.
/// `word_mode` only affects `word_count`: reading time always counts plain
/// whitespace-separated tokens.
#[inline]
#[must_use]
pub fn compute_metrics(text: &str, options: &EngineOptions) -> Metrics {
    let reading_words = count_words(text, WordMode::Whitespace);
    Metrics {
        char_count: text.chars().count(),
        word_count: count_words(text, options.word_mode),
        sentence_count: count_sentences(text),
        reading_minutes: reading_minutes(reading_words, options.words_per_minute),
    }
}

/// Estimated reading time in whole minutes, rounded up.
///
/// Zero words read in zero minutes; 1 to `words_per_minute` words in one.
#[inline]
#[must_use]
pub const fn reading_minutes(word_count: usize, words_per_minute: NonZeroUsize) -> usize {
    word_count.div_ceil(words_per_minute.get())
}

#[inline]
#[must_use]
pub fn format_reading_time(minutes: usize) -> String {
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("Approx. reading time: {minutes} {unit}")
}

/// Combined entry point: metrics and letter frequencies for one snapshot.
#[inline]
#[must_use]
pub fn analyze(text: &str, options: &EngineOptions) -> Analysis {
    let metrics = compute_metrics(text, options);
    let frequency = compute_frequency_table(text);
    trace!(
        chars = metrics.char_count,
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        letters = frequency.len(),
        "analyzed snapshot"
    );
    Analysis { metrics, frequency }
}
