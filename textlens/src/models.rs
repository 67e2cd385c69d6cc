// src/models.rs
pub mod disclosure;
pub mod file_metrics;
pub mod frequency;
pub mod limit;
pub mod metrics;
pub mod report;

pub use disclosure::{DensityView, DisclosurePolicy, DisclosureState, RenderedEntry};
pub use file_metrics::FileMetrics;
pub use frequency::{ALPHABET_LEN, FrequencyEntry, FrequencyTable};
pub use limit::{LimitConfig, LimitStatus, LimitValue};
pub use metrics::{Analysis, DEFAULT_WORDS_PER_MINUTE, EngineOptions, Metrics, WordMode};
pub use report::Report;
