//! Error types
//!
//! Summarization itself never fails: empty or unusable input degrades to a
//! sentinel or a truncated excerpt. Errors only arise while loading or
//! validating a [`SummaryConfig`](crate::config::SummaryConfig).

use thiserror::Error;

/// Errors produced while building a summarizer configuration
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The configuration JSON could not be parsed
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A count field that must be positive was zero
    #[error("`{field}` must be at least 1")]
    ZeroCount { field: &'static str },

    /// The empty-input sentinel was blank
    #[error("`empty_sentinel` must not be blank")]
    BlankSentinel,

    /// A stopword language the filter has no list for
    #[error("unsupported stopword language: {0}")]
    UnsupportedLanguage(String),
}

/// Result alias for fallible configuration operations
pub type Result<T> = std::result::Result<T, SummarizerError>;
