// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, read_input, resolve_settings, run, run_interactive, run_with_output};
pub use config::{
    CONFIG_FILE_NAME, ConfigError, LimitSettings, Settings, find_config_file, load_settings,
    load_settings_from_file,
};
pub use crate::core::disclosure::{
    ALWAYS_VISIBLE, DisclosureController, NO_CHARACTERS_MESSAGE, clamp_percent, density_view,
    has_overflow, ordered_entries, renderable_entries, toggle_disclosure, toggle_label,
};
pub use crate::core::limit::{evaluate_limit, limit_message, parse_limit};
pub use crate::core::metrics::{
    analyze, compute_frequency_table, compute_metrics, count_sentences, count_words,
    format_reading_time, is_word_token, reading_minutes,
};
pub use crate::core::scanner::analyze_directory;
pub use crate::core::session::Session;
pub use models::{
    Analysis, DEFAULT_WORDS_PER_MINUTE, DensityView, DisclosurePolicy, DisclosureState,
    EngineOptions, FileMetrics, FrequencyEntry, FrequencyTable, LimitConfig, LimitStatus,
    LimitValue, Metrics, Report, WordMode,
};
pub use utils::{pad_count, render_report};
