// src/models/frequency.rs
use serde::Serialize;

pub const ALPHABET_LEN: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub letter: char,
    pub count: usize,
    /// Share of the total character count, not of the letter count.
    pub percent: f64,
}

/// Per-letter occurrence counts over a text snapshot.
///
/// Slots are indexed by alphabet position, so iteration order is always
/// `a..=z`. Letters that never occurred have no entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
    total_chars: usize,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub const fn new(total_chars: usize) -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
            total_chars,
        }
    }

    /// Counts `ch` if it is an ASCII letter, case-insensitively.
    ///
    /// Returns `false` for anything else, including non-ASCII letters.
    #[inline]
    pub fn record(&mut self, ch: char) -> bool {
        let Some(slot) = slot_index(ch).and_then(|idx| self.counts.get_mut(idx)) else {
            return false;
        };
        *slot = slot.saturating_add(1);
        true
    }

    /// Denominator used for every percentage in the table.
    #[inline]
    #[must_use]
    pub const fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// `false` is the "no characters" state: the snapshot was empty.
    #[inline]
    #[must_use]
    pub const fn has_characters(&self) -> bool {
        self.total_chars > 0
    }

    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        slot_index(letter)
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct letters observed.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    #[inline]
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Observed letters in alphabetical order.
    #[inline]
    pub fn entries(&self) -> impl Iterator<Item = FrequencyEntry> + '_ {
        self.counts
            .iter()
            .zip(b'a'..=b'z')
            .filter(|(count, _)| **count > 0)
            .map(|(&count, byte)| FrequencyEntry {
                letter: char::from(byte),
                count,
                percent: percent_of(count, self.total_chars),
            })
    }
}

fn slot_index(ch: char) -> Option<usize> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    let byte = u8::try_from(ch.to_ascii_lowercase()).ok()?;
    Some(usize::from(byte.saturating_sub(b'a')))
}

#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}
