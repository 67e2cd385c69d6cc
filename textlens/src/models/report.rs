// src/models/report.rs
use serde::Serialize;

use crate::models::{DensityView, LimitStatus, Metrics};

/// Render-ready output of one pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metrics: Metrics,
    pub reading_time: String,
    pub density: DensityView,
    /// More entries than the always-visible head; the host shows a toggle.
    pub overflow: bool,
    pub toggle_label: Option<&'static str>,
    pub limit: LimitStatus,
}
