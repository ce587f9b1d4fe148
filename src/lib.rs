//! # textrank_lite
//!
//! Frequency-weighted extractive summarization and keyword extraction.
//!
//! Sentences are scored by the document-wide frequency of their content
//! words, normalized by the log of their length, and the best ones are
//! returned in their original order. Keywords come from the same frequency
//! counting.
//!
//! ## Features
//!
//! - **Never fails**: blank input yields a sentinel, unrankable input a
//!   truncated excerpt
//! - **Stateless**: every call is independent; a [`Summarizer`] can be
//!   shared across threads
//! - **Configurable**: sentence and keyword counts, length thresholds and
//!   stopword lists via [`SummaryConfig`]
//!
//! ```
//! let text = "Quantum computing uses qubits to perform calculations. \
//!             Qubits can hold many states at once during quantum computing. \
//!             The cafeteria served soup for lunch on that day.";
//! let summary = textrank_lite::summarize(text, 1);
//! assert!(summary.contains("qubits") || summary.contains("Qubits"));
//!
//! let keywords = textrank_lite::extract_keywords(text, 2);
//! assert_eq!(keywords, vec!["quantum", "computing"]);
//! ```

use std::sync::OnceLock;

pub mod config;
pub mod digest;
pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use config::{StopwordSource, SummaryConfig, EMPTY_SENTINEL};
pub use errors::{Result, SummarizerError};
pub use types::{Keyword, RankedSentence, Sentence, Summary, SummaryOutcome};

// Re-export main functionality
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use summarizer::{
    frequency::FrequencyTable, keywords::KeywordExtractor, selector::SentenceSelector, Summarizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of keywords
pub const DEFAULT_KEYWORD_COUNT: usize = 6;

fn default_summarizer() -> &'static Summarizer {
    static DEFAULT: OnceLock<Summarizer> = OnceLock::new();
    DEFAULT.get_or_init(Summarizer::new)
}

/// Summarize `text` into at most `sentence_count` sentences
///
/// Returns [`EMPTY_SENTINEL`] for blank input and the first 500 characters
/// when no sentence has at least six words.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    default_summarizer()
        .summarize_n(text, sentence_count)
        .into_text()
}

/// Up to `top_n` keywords, most frequent first
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    default_summarizer()
        .keywords_with_counts(text, top_n)
        .into_iter()
        .map(|k| k.word)
        .collect()
}
