// src/models/limit.rs
use serde::Serialize;

use crate::core::limit::parse_limit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitValue {
    Valid(i64),
    /// The configured text did not start with an integer.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitConfig {
    pub enabled: bool,
    pub limit: LimitValue,
}

impl LimitConfig {
    /// Builds a config from the raw text of a limit input field.
    #[inline]
    #[must_use]
    pub fn new(enabled: bool, raw_limit: &str) -> Self {
        Self {
            enabled,
            limit: parse_limit(raw_limit),
        }
    }

    #[inline]
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            limit: LimitValue::Invalid,
        }
    }
}

impl Default for LimitConfig {
    #[inline]
    fn default() -> Self {
        Self::disabled()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LimitStatus {
    pub exceeded: bool,
    /// Empty unless `exceeded`.
    pub message: String,
}
