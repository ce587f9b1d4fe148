//! Word tokenization and sentence splitting
//!
//! Words are maximal runs of ASCII letters that sit on word boundaries, so
//! `"abc123"` and `"café"` contribute nothing. Sentences end after `.`, `!`
//! or `?` followed by whitespace. There is no abbreviation handling:
//! `"Dr. Smith"` is two sentences, and so is `"3. 5"`.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Sentence;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b[a-z]+\b").expect("word pattern is valid"))
}

fn boundary_regex() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"))
}

/// Stateless tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase alphabetic tokens of `text`, in order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        word_regex()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Split `text` into sentences with byte offsets into `text`
    ///
    /// Leading and trailing whitespace of the document is ignored. The
    /// whitespace run after each terminator is dropped.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let base = text.len() - text.trim_start().len();

        let mut sentences = Vec::new();
        let mut cursor = 0;
        for m in boundary_regex().find_iter(trimmed) {
            // terminators are single-byte ASCII
            let end = m.start() + 1;
            sentences.push(self.make_sentence(trimmed, cursor, end, base, sentences.len()));
            cursor = m.end();
        }
        if cursor < trimmed.len() {
            sentences.push(self.make_sentence(trimmed, cursor, trimmed.len(), base, sentences.len()));
        }

        sentences
    }

    fn make_sentence(
        &self,
        trimmed: &str,
        start: usize,
        end: usize,
        base: usize,
        index: usize,
    ) -> Sentence {
        let text = &trimmed[start..end];
        Sentence {
            text: text.to_string(),
            start: base + start,
            end: base + end,
            index,
            word_count: text.split_whitespace().count(),
            tokens: self.tokenize(text),
        }
    }
}
