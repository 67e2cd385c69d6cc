// src/core/limit.rs
use crate::models::{LimitConfig, LimitStatus, LimitValue};

/// Parses the raw text of a limit field.
///
/// Mirrors a lenient integer parser: leading whitespace and a single sign are
/// accepted, then the longest run of decimal digits is taken and anything
/// after it ignored. Input without leading digits is [`LimitValue::Invalid`].
/// Magnitudes beyond `i64` saturate.
#[inline]
#[must_use]
pub fn parse_limit(raw: &str) -> LimitValue {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).unwrap_or_default();
    if digits.is_empty() {
        return LimitValue::Invalid;
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit.saturating_sub(b'0')))
    });
    LimitValue::Valid(if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    })
}

#[inline]
#[must_use]
pub fn limit_message(limit: i64) -> String {
    format!("Limit reached! Your text exceeds {limit} characters.")
}

/// Compares the current length against the configured limit.
///
/// Stateless: crossing the threshold in either direction flips the result on
/// the very next call.
#[inline]
#[must_use]
pub fn evaluate_limit(char_count: usize, config: &LimitConfig) -> LimitStatus {
    match config.limit {
        LimitValue::Valid(limit) if config.enabled && exceeds(char_count, limit) => LimitStatus {
            exceeded: true,
            message: limit_message(limit),
        },
        LimitValue::Valid(_) | LimitValue::Invalid => LimitStatus::default(),
    }
}

fn exceeds(char_count: usize, limit: i64) -> bool {
    i64::try_from(char_count).map_or(true, |count| count > limit)
}
