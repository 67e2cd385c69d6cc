// src/models/disclosure.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether entries past the always-visible head are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DisclosureState {
    pub expanded: bool,
}

impl DisclosureState {
    pub const COLLAPSED: Self = Self { expanded: false };
    pub const EXPANDED: Self = Self { expanded: true };

    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }
}

/// What happens to the disclosure state when the frequency table is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisclosurePolicy {
    /// Every rebuild collapses the list back to its head.
    #[default]
    Collapse,
    /// Expansion survives rebuilds until toggled again.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEntry {
    /// Upper-cased for display.
    pub letter: char,
    pub count: usize,
    /// Clamped into `[0, 100]`.
    pub percent: f64,
    /// Round-half-up value for the progress indicator.
    pub rounded_percent: u8,
    pub floored_percent: u8,
    /// `"{floored} ({percent:.2}%)"`
    pub formatted_percent: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "entries", rename_all = "snake_case")]
pub enum DensityView {
    NoCharacters,
    Entries(Vec<RenderedEntry>),
}

impl DensityView {
    #[inline]
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&RenderedEntry> {
        match self {
            Self::NoCharacters => Vec::new(),
            Self::Entries(entries) => entries.iter().filter(|e| e.visible).collect(),
        }
    }
}
