// src/models/metrics.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::models::FrequencyTable;

/// Average reading speed used for the reading-time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: NonZeroUsize = match NonZeroUsize::new(200) {
    Some(wpm) => wpm,
    None => panic!("words per minute must be non-zero"),
};

/// The four scalar statistics derived from a text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metrics {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub reading_minutes: usize,
}

/// How whitespace-separated tokens are turned into a word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WordMode {
    /// Only tokens containing at least one of `[A-Za-z0-9_]` count.
    #[default]
    Strict,
    /// Every non-empty token counts, punctuation-only ones included.
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub words_per_minute: NonZeroUsize,
    pub word_mode: WordMode,
}

impl EngineOptions {
    #[inline]
    #[must_use]
    pub const fn new(words_per_minute: NonZeroUsize, word_mode: WordMode) -> Self {
        Self {
            words_per_minute,
            word_mode,
        }
    }
}

impl Default for EngineOptions {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE, WordMode::default())
    }
}

/// Everything the engine derives from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub metrics: Metrics,
    pub frequency: FrequencyTable,
}
