// src/core/session.rs
use tracing::debug;

use crate::core::disclosure::{DisclosureController, has_overflow};
use crate::core::limit::evaluate_limit;
use crate::core::metrics::{analyze, format_reading_time};
use crate::models::{
    Analysis, DisclosurePolicy, DisclosureState, EngineOptions, LimitConfig, Report,
};

/// Drives the pipeline for one editing session.
///
/// Holds the current text snapshot, the disclosure state and the limit
/// configuration. Every text change recomputes all statistics from scratch
/// before returning; toggling and limit changes reuse the last analysis.
#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    options: EngineOptions,
    analysis: Analysis,
    disclosure: DisclosureController,
    limit: LimitConfig,
}

impl Session {
    #[inline]
    #[must_use]
    pub fn new(options: EngineOptions, policy: DisclosurePolicy, limit: LimitConfig) -> Self {
        Self {
            text: String::new(),
            options,
            analysis: analyze("", &options),
            disclosure: DisclosureController::new(policy),
            limit,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    #[inline]
    #[must_use]
    pub const fn disclosure_state(&self) -> DisclosureState {
        self.disclosure.state()
    }

    /// Replaces the whole buffer and recomputes.
    #[inline]
    pub fn set_text(&mut self, text: impl Into<String>) -> Report {
        self.text = text.into();
        self.rebuild();
        self.report()
    }

    #[inline]
    pub fn append_text(&mut self, more: &str) -> Report {
        self.text.push_str(more);
        self.rebuild();
        self.report()
    }

    #[inline]
    pub fn clear(&mut self) -> Report {
        self.set_text(String::new())
    }

    /// Flips see more/see less. A no-op when nothing is hidden.
    #[inline]
    pub fn toggle_disclosure(&mut self) -> Report {
        self.disclosure.toggle(&self.analysis.frequency);
        self.report()
    }

    /// Swaps the limit configuration without touching the frequency list.
    #[inline]
    pub fn set_limit(&mut self, limit: LimitConfig) -> Report {
        debug!(enabled = limit.enabled, limit = ?limit.limit, "limit configuration changed");
        self.limit = limit;
        self.report()
    }

    #[inline]
    #[must_use]
    pub fn report(&self) -> Report {
        let metrics = self.analysis.metrics;
        let frequency = &self.analysis.frequency;
        Report {
            metrics,
            reading_time: format_reading_time(metrics.reading_minutes),
            density: self.disclosure.view(frequency),
            overflow: has_overflow(frequency),
            toggle_label: self.disclosure.label(frequency),
            limit: evaluate_limit(metrics.char_count, &self.limit),
        }
    }

    fn rebuild(&mut self) {
        self.analysis = analyze(&self.text, &self.options);
        self.disclosure.table_rebuilt();
        debug!(
            chars = self.analysis.metrics.char_count,
            expanded = self.disclosure.state().expanded,
            policy = ?self.disclosure.policy(),
            "recomputed text statistics"
        );
    }
}

impl Default for Session {
    #[inline]
    fn default() -> Self {
        Self::new(
            EngineOptions::default(),
            DisclosurePolicy::default(),
            LimitConfig::default(),
        )
    }
}
