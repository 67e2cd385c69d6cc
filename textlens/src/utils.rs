// src/utils.rs
use std::fmt::Write as _;
use std::io;

use crate::core::disclosure::NO_CHARACTERS_MESSAGE;
use crate::models::{DensityView, FileMetrics, Report};

const BAR_WIDTH: usize = 20;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Zero-pads a count to at least two digits.
#[must_use]
pub fn pad_count(count: usize) -> String {
    format!("{count:02}")
}

/// Fills `BAR_WIDTH` cells in proportion to a 0-100 value.
fn progress_bar(rounded_percent: u8) -> String {
    let filled = usize::from(rounded_percent.min(100))
        .saturating_mul(BAR_WIDTH)
        .div_ceil(100);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

/// Plain-text rendering of a report, one statistic per line followed by the
/// letter density list.
#[must_use]
pub fn render_report(report: &Report) -> String {
    let metrics = &report.metrics;
    let mut out = String::new();

    let _ = writeln!(out, "Total characters: {}", pad_count(metrics.char_count));
    let _ = writeln!(out, "Word count: {}", pad_count(metrics.word_count));
    let _ = writeln!(out, "Sentence count: {}", pad_count(metrics.sentence_count));
    let _ = writeln!(out, "{}", report.reading_time);
    if report.limit.exceeded {
        let _ = writeln!(out, "{}", report.limit.message);
    }

    out.push_str("\nLetter density\n");
    match &report.density {
        DensityView::NoCharacters => {
            let _ = writeln!(out, "{NO_CHARACTERS_MESSAGE}");
        }
        DensityView::Entries(_) => {
            for entry in report.density.visible_entries() {
                let _ = writeln!(
                    out,
                    "{} {} {}",
                    entry.letter,
                    progress_bar(entry.rounded_percent),
                    entry.formatted_percent
                );
            }
        }
    }
    if let Some(label) = report.toggle_label {
        let _ = writeln!(out, "{label}");
    }

    out
}

/// Writes one line per file for the `top` largest files.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_top_files<W: io::Write>(
    out: &mut W,
    files: &[FileMetrics],
    top: usize,
) -> io::Result<()> {
    for file in files.iter().take(top) {
        writeln!(
            out,
            "{:8} words {:6} chars {:4} min  {}",
            file.metrics.word_count,
            file.metrics.char_count,
            file.metrics.reading_minutes,
            file.path.display()
        )?;
    }
    Ok(())
}
