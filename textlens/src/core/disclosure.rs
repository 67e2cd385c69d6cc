// src/core/disclosure.rs
use tracing::debug;

use crate::models::{
    DensityView, DisclosurePolicy, DisclosureState, FrequencyEntry, FrequencyTable, RenderedEntry,
};

/// Entries at these leading positions are shown regardless of state.
pub const ALWAYS_VISIBLE: usize = 5;

pub const NO_CHARACTERS_MESSAGE: &str = "No characters found. Start typing to see letter density.";

/// Whether the host should offer the see more/see less toggle at all.
#[inline]
#[must_use]
pub fn has_overflow(table: &FrequencyTable) -> bool {
    table.len() > ALWAYS_VISIBLE
}

#[inline]
#[must_use]
pub const fn toggle_disclosure(state: DisclosureState) -> DisclosureState {
    state.toggled()
}

#[inline]
#[must_use]
pub const fn toggle_label(state: DisclosureState) -> &'static str {
    if state.expanded { "See less" } else { "See more" }
}

/// Entries sorted by percent descending, ties by letter ascending.
#[inline]
#[must_use]
pub fn ordered_entries(table: &FrequencyTable) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = table.entries().collect();
    entries.sort_by(|a, b| {
        b.percent
            .total_cmp(&a.percent)
            .then_with(|| a.letter.cmp(&b.letter))
    });
    entries
}

/// Clamps into `[0, 100]`, mapping NaN to 0.
#[inline]
#[must_use]
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Ordered, display-ready entries with per-entry visibility.
#[inline]
#[must_use]
pub fn renderable_entries(table: &FrequencyTable, state: DisclosureState) -> Vec<RenderedEntry> {
    ordered_entries(table)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| render_entry(&entry, idx < ALWAYS_VISIBLE || state.expanded))
        .collect()
}

#[inline]
#[must_use]
pub fn density_view(table: &FrequencyTable, state: DisclosureState) -> DensityView {
    if !table.has_characters() {
        return DensityView::NoCharacters;
    }
    DensityView::Entries(renderable_entries(table, state))
}

fn render_entry(entry: &FrequencyEntry, visible: bool) -> RenderedEntry {
    let percent = clamp_percent(entry.percent);
    // The integer part and the two-decimal text are derived separately and
    // can disagree, e.g. 12.999 renders as "12 (13.00%)".
    let floored_percent = percent_to_u8(percent.floor());
    RenderedEntry {
        letter: entry.letter.to_ascii_uppercase(),
        count: entry.count,
        percent,
        rounded_percent: percent_to_u8(percent.round()),
        floored_percent,
        formatted_percent: format!("{floored_percent} ({}%)", format_fixed_2(percent)),
        visible,
    }
}

/// Two-decimal text where a value exactly halfway between two hundredths
/// rounds up.
fn format_fixed_2(value: f64) -> String {
    // Only an odd number of eighths lands exactly on a half hundredth.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{value:.2}")
}

#[expect(clippy::as_conversions, reason = "Value is clamped to 0..=100")]
#[expect(clippy::cast_possible_truncation, reason = "Value is clamped to 0..=100")]
#[expect(clippy::cast_sign_loss, reason = "Value is clamped to 0..=100")]
fn percent_to_u8(value: f64) -> u8 {
    value as u8
}

/// Owns the collapsed/expanded state for one rendering session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureController {
    state: DisclosureState,
    policy: DisclosurePolicy,
}

impl DisclosureController {
    #[inline]
    #[must_use]
    pub const fn new(policy: DisclosurePolicy) -> Self {
        Self {
            state: DisclosureState::COLLAPSED,
            policy,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> DisclosureState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> DisclosurePolicy {
        self.policy
    }

    /// Flips the state when `table` has entries to reveal.
    ///
    /// Returns whether the state changed.
    #[inline]
    pub fn toggle(&mut self, table: &FrequencyTable) -> bool {
        if !has_overflow(table) {
            debug!("ignoring disclosure toggle without overflow");
            return false;
        }
        self.state = toggle_disclosure(self.state);
        debug!(expanded = self.state.expanded, "toggled letter density list");
        true
    }

    /// Applies the policy after the frequency table was rebuilt.
    #[inline]
    pub fn table_rebuilt(&mut self) {
        if self.policy == DisclosurePolicy::Collapse {
            self.state = DisclosureState::COLLAPSED;
        }
    }

    #[inline]
    #[must_use]
    pub fn view(&self, table: &FrequencyTable) -> DensityView {
        density_view(table, self.state)
    }

    #[inline]
    #[must_use]
    pub fn label(&self, table: &FrequencyTable) -> Option<&'static str> {
        has_overflow(table).then(|| toggle_label(self.state))
    }
}
