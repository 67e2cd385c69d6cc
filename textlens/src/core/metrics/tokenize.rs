// src/core/metrics/tokenize.rs
use crate::models::WordMode;

/// Counts whitespace-separated words in `text`.
///
/// Leading and trailing whitespace is ignored and runs of whitespace act as a
/// single separator. In [`WordMode::Strict`] tokens made only of punctuation
/// or symbols are dropped as well.
#[inline]
#[must_use]
pub fn count_words(text: &str, mode: WordMode) -> usize {
    let tokens = text.split_whitespace();
    match mode {
        WordMode::Whitespace => tokens.count(),
        WordMode::Strict => tokens.filter(|token| is_word_token(token)).count(),
    }
}

/// `true` if `token` holds at least one ASCII letter, digit or underscore.
#[inline]
#[must_use]
pub fn is_word_token(token: &str) -> bool {
    token
        .chars()
        .any(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Counts the segments between runs of `.`, `!` and `?` that hold anything
/// besides whitespace.
///
/// Text without any terminator is a single sentence.
#[inline]
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    text.split(is_terminator)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
