//! Summarization components
//!
//! Provides frequency-weighted extractive summarization and keyword
//! extraction. [`Summarizer`] ties the stages together:
//!
//! 1. Split sentences
//! 2. Count non-stopword tokens over the whole document
//! 3. Score and select sentences, restoring document order
//!
//! Keyword extraction shares the tokenizer and stopword filter.

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a stage (when the `tracing` feature is enabled).
/// When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Emit a debug event for a degraded result (when `tracing` is enabled).
macro_rules! trace_degraded {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod frequency;
pub mod keywords;
pub mod selector;

use rayon::prelude::*;

use crate::config::SummaryConfig;
use crate::errors::Result;
use crate::nlp::clean::truncate_chars;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Keyword, Sentence, Summary};
use frequency::FrequencyTable;
use keywords::KeywordExtractor;
use selector::SentenceSelector;

#[cfg(feature = "tracing")]
const STAGE_SPLIT: &str = "split";
#[cfg(feature = "tracing")]
const STAGE_FREQUENCY: &str = "frequency";
#[cfg(feature = "tracing")]
const STAGE_SELECT: &str = "select";
#[cfg(feature = "tracing")]
const STAGE_KEYWORDS: &str = "keywords";

/// Extractive summarizer with a fixed configuration
///
/// Holds no per-call state; one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    stopwords: StopwordFilter,
    tokenizer: Tokenizer,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config and curated stopwords
    pub fn new() -> Self {
        Self {
            config: SummaryConfig::default(),
            stopwords: StopwordFilter::curated(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Create with a validated custom config
    pub fn with_config(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = config.stopword_filter()?;
        Ok(Self {
            config,
            stopwords,
            tokenizer: Tokenizer::new(),
        })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summary with the configured sentence count
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_n(text, self.config.sentence_count)
            .into_text()
    }

    /// Longer summary for follow-up requests
    pub fn summarize_expanded(&self, text: &str) -> String {
        self.summarize_n(text, self.config.expanded_sentence_count)
            .into_text()
    }

    /// Structured summary with the configured sentence count
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        self.summarize_n(text, self.config.sentence_count)
    }

    /// Structured summary of at most `n` sentences
    ///
    /// Never fails. Blank input yields the configured sentinel; input with no
    /// sentence long enough to rank yields its leading characters instead.
    pub fn summarize_n(&self, text: &str, n: usize) -> Summary {
        if text.trim().is_empty() {
            trace_degraded!("blank input, returning sentinel");
            return Summary::empty(&self.config.empty_sentinel);
        }

        let sentences = {
            trace_stage!(STAGE_SPLIT);
            self.tokenizer.split_sentences(text)
        };

        let selector = SentenceSelector::new()
            .with_num_sentences(n)
            .with_min_sentence_words(self.config.min_sentence_words);

        if !sentences.iter().any(|s| selector.is_candidate(s)) {
            trace_degraded!(
                sentences = sentences.len(),
                "no sentence long enough, truncating"
            );
            let excerpt = truncate_chars(text, self.config.fallback_chars);
            return Summary::truncated(excerpt.to_string());
        }

        let frequencies = {
            trace_stage!(STAGE_FREQUENCY);
            self.document_frequencies(&sentences)
        };

        let ranked = {
            trace_stage!(STAGE_SELECT);
            selector.select(&sentences, &frequencies, &self.stopwords)
        };

        Summary::ranked(ranked)
    }

    /// Keywords with the configured count
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.keywords_with_counts(text, self.config.keyword_count)
            .into_iter()
            .map(|k| k.word)
            .collect()
    }

    /// Up to `top_n` keywords with their counts, most frequent first
    pub fn keywords_with_counts(&self, text: &str, top_n: usize) -> Vec<Keyword> {
        trace_stage!(STAGE_KEYWORDS);
        let tokens = self.tokenizer.tokenize(text);
        KeywordExtractor::new()
            .with_min_len(self.config.min_keyword_len)
            .extract(tokens.iter().map(String::as_str), &self.stopwords, top_n)
    }

    /// Summarize many documents in parallel, preserving input order
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }

    /// Keywords for many documents in parallel, preserving input order
    pub fn keywords_batch<S>(&self, texts: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.keywords(text.as_ref()))
            .collect()
    }

    /// Frequencies over every sentence, including ones too short to select
    fn document_frequencies(&self, sentences: &[Sentence]) -> FrequencyTable {
        FrequencyTable::from_tokens(
            sentences
                .iter()
                .flat_map(|s| s.tokens.iter().map(String::as_str)),
            |t| !self.stopwords.is_stopword(t),
        )
    }
}
