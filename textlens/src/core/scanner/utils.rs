// src/core/scanner/utils.rs
use crate::utils::is_hidden;

/// Determines if a directory entry should be left out of a directory scan:
/// - Hidden files and directories
/// - Directories named in `exclude_dirs`
///
/// Only entries below the scan root are matched, so the root itself is never
/// excluded. Used with `filter_entry`, an excluded directory also drops
/// everything beneath it.
pub fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[&str]) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if is_hidden(entry) {
        return true;
    }

    entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| {
            exclude_dirs
                .iter()
                .any(|dir| !dir.is_empty() && *dir == name)
        })
}
