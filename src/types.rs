//! Core types shared across the tokenizer and the ranker

use serde::{Deserialize, Serialize};

/// A sentence of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, verbatim from the document
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// Ordinal position among all sentences of the document
    pub index: usize,
    /// Whitespace-delimited word count
    pub word_count: usize,
    /// Lowercase alphabetic tokens, in order
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Number of alphabetic tokens
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }
}

/// A candidate sentence with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub sentence: Sentence,
    /// Frequency-weighted, length-normalized score
    pub score: f64,
    /// 1-based position in score order
    pub rank: usize,
}

/// A keyword with its frequency in the document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Top sentences selected by score
    Ranked,
    /// No sentence passed the length filter; the text was truncated instead
    Truncated,
    /// Input was empty or whitespace only
    Empty,
}

/// Structured summarization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order (empty unless `Ranked`)
    pub sentences: Vec<RankedSentence>,
    pub outcome: SummaryOutcome,
    text: String,
}

impl Summary {
    pub(crate) fn ranked(sentences: Vec<RankedSentence>) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            sentences,
            outcome: SummaryOutcome::Ranked,
            text,
        }
    }

    pub(crate) fn truncated(text: String) -> Self {
        Self {
            sentences: Vec::new(),
            outcome: SummaryOutcome::Truncated,
            text,
        }
    }

    pub(crate) fn empty(sentinel: &str) -> Self {
        Self {
            sentences: Vec::new(),
            outcome: SummaryOutcome::Empty,
            text: sentinel.to_string(),
        }
    }

    /// The summary as a single string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the summary, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether the result came from sentence ranking
    pub fn is_ranked(&self) -> bool {
        self.outcome == SummaryOutcome::Ranked
    }
}
