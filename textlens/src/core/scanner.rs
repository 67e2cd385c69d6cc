// src/core/scanner.rs
mod utils;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::metrics::compute_metrics;
use crate::models::{EngineOptions, FileMetrics};

pub use utils::should_exclude;

/// Computes text statistics for every file within a directory and its
/// subdirectories.
///
/// Files that are not valid UTF-8 are skipped. The result is sorted by word
/// count, largest first, with ties ordered by path.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `exclude_dirs` - A list of directory names to exclude from the scan
/// * `options` - Word mode and reading speed for the statistics
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be resolved for a relative `dir`
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
#[inline]
pub fn analyze_directory(
    dir: &Path,
    exclude_dirs: &[&str],
    options: &EngineOptions,
) -> Result<Vec<FileMetrics>> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut files = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        match fs::read_to_string(path) {
            Ok(content) => files.push(FileMetrics {
                path: path.to_path_buf(),
                metrics: compute_metrics(&content, options),
            }),
            Err(err) => debug!(path = %path.display(), error = %err, "skipping unreadable file"),
        }
    }

    files.sort_by(|a, b| {
        b.metrics
            .word_count
            .cmp(&a.metrics.word_count)
            .then_with(|| a.path.cmp(&b.path))
    });
    Ok(files)
}
