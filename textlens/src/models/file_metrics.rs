// src/models/file_metrics.rs

use serde::Serialize;
use std::path::PathBuf;

use crate::models::Metrics;

#[derive(Debug, Serialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub metrics: Metrics,
}
