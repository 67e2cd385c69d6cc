// src/config.rs
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::{
    DEFAULT_WORDS_PER_MINUTE, DisclosurePolicy, EngineOptions, LimitConfig, WordMode,
};

pub const CONFIG_FILE_NAME: &str = ".textlens.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("words_per_minute must be greater than zero")]
    InvalidWordsPerMinute,
}

/// Settings read from `.textlens.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub words_per_minute: usize,
    pub word_mode: WordMode,
    pub disclosure: DisclosurePolicy,
    pub limit: LimitSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSettings {
    pub enabled: bool,
    /// Raw limit text, parsed the same way as a limit input field.
    pub value: String,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE.get(),
            word_mode: WordMode::default(),
            disclosure: DisclosurePolicy::default(),
            limit: LimitSettings::default(),
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWordsPerMinute`] if `words_per_minute` is zero.
    #[inline]
    pub fn engine_options(&self) -> Result<EngineOptions, ConfigError> {
        let words_per_minute =
            NonZeroUsize::new(self.words_per_minute).ok_or(ConfigError::InvalidWordsPerMinute)?;
        Ok(EngineOptions::new(words_per_minute, self.word_mode))
    }

    #[inline]
    #[must_use]
    pub fn limit_config(&self) -> LimitConfig {
        LimitConfig::new(self.limit.enabled, &self.limit.value)
    }
}

/// Reads and parses a single settings file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_settings_from_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds the nearest `.textlens.toml`, starting at `dir` and walking up
/// through its parents.
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads settings from the nearest config file, or defaults if none exists.
///
/// # Errors
///
/// This function may return an error if a config file is found but cannot be
/// read or parsed.
#[inline]
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    match find_config_file(dir) {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            load_settings_from_file(&path)
        }
        None => {
            debug!(dir = %dir.display(), "no config file found, using defaults");
            Ok(Settings::default())
        }
    }
}
