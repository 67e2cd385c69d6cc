// src/core/metrics/frequency.rs
use crate::models::FrequencyTable;

/// Builds the letter-frequency table for `text`.
///
/// Only ASCII `a-z`/`A-Z` are counted, folded to lower case. Percentages are
/// taken over every character in `text`, so digits, spaces and punctuation
/// dilute them. An empty `text` yields an empty table in the "no characters"
/// state.
#[inline]
#[must_use]
pub fn compute_frequency_table(text: &str) -> FrequencyTable {
    let total_chars = text.chars().count();
    let mut table = FrequencyTable::new(total_chars);
    if total_chars == 0 {
        return table;
    }

    for ch in text.chars() {
        table.record(ch);
    }
    table
}
