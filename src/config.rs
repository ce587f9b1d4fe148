//! Summarizer configuration.
//!
//! A [`SummaryConfig`] carries every tunable of the ranker and keyword
//! extractor. Every field has a default, so partial JSON is accepted.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "sentence_count": 5,
//!   "expanded_sentence_count": 10,
//!   "keyword_count": 6,
//!   "min_keyword_len": 4,
//!   "min_sentence_words": 6,
//!   "fallback_chars": 500,
//!   "empty_sentinel": "No content available.",
//!   "stopwords": { "kind": "language", "language": "en" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizerError};
use crate::nlp::stopwords::StopwordFilter;

/// Returned for empty or whitespace-only input.
pub const EMPTY_SENTINEL: &str = "No content available.";

/// Where the stopword list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopwordSource {
    /// The built-in curated English list.
    #[default]
    Curated,
    /// A per-language list from the `stop-words` crate.
    Language { language: String },
    /// An explicit list.
    Custom { words: Vec<String> },
    /// No stopword filtering.
    None,
}

/// Ranker and keyword extractor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// Sentences in a regular summary.
    pub sentence_count: usize,
    /// Sentences in an expanded ("tell me more") summary.
    pub expanded_sentence_count: usize,
    /// Keywords returned by keyword extraction.
    pub keyword_count: usize,
    /// Minimum keyword length in characters.
    pub min_keyword_len: usize,
    /// Sentences with fewer whitespace-delimited words are never selected.
    pub min_sentence_words: usize,
    /// Characters kept when no sentence qualifies.
    pub fallback_chars: usize,
    /// Returned for blank input.
    pub empty_sentinel: String,
    pub stopwords: StopwordSource,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentence_count: 5,
            expanded_sentence_count: 10,
            keyword_count: 6,
            min_keyword_len: 4,
            min_sentence_words: 6,
            fallback_chars: 500,
            empty_sentinel: EMPTY_SENTINEL.to_string(),
            stopwords: StopwordSource::Curated,
        }
    }
}

impl SummaryConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that counts are positive and the sentinel is not blank.
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("sentence_count", self.sentence_count),
            ("expanded_sentence_count", self.expanded_sentence_count),
            ("keyword_count", self.keyword_count),
            ("fallback_chars", self.fallback_chars),
        ];
        if let Some(&(field, _)) = counts.iter().find(|(_, value)| *value == 0) {
            return Err(SummarizerError::ZeroCount { field });
        }
        if self.empty_sentinel.trim().is_empty() {
            return Err(SummarizerError::BlankSentinel);
        }
        Ok(())
    }

    /// Build the stopword filter selected by [`Self::stopwords`].
    pub fn stopword_filter(&self) -> Result<StopwordFilter> {
        match &self.stopwords {
            StopwordSource::Curated => Ok(StopwordFilter::curated()),
            StopwordSource::Language { language } => StopwordFilter::for_language(language),
            StopwordSource::Custom { words } => Ok(StopwordFilter::from_list(words)),
            StopwordSource::None => Ok(StopwordFilter::empty()),
        }
    }

    pub fn with_sentence_count(mut self, n: usize) -> Self {
        self.sentence_count = n;
        self
    }

    pub fn with_expanded_sentence_count(mut self, n: usize) -> Self {
        self.expanded_sentence_count = n;
        self
    }

    pub fn with_keyword_count(mut self, n: usize) -> Self {
        self.keyword_count = n;
        self
    }

    pub fn with_min_sentence_words(mut self, n: usize) -> Self {
        self.min_sentence_words = n;
        self
    }

    pub fn with_fallback_chars(mut self, n: usize) -> Self {
        self.fallback_chars = n;
        self
    }

    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = source;
        self
    }
}
