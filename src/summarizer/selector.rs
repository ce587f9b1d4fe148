//! Frequency-weighted sentence selection
//!
//! Each candidate sentence scores the summed document frequency of its
//! non-stopword tokens, divided by `ln(tokens + 1)` so that long sentences
//! do not win on length alone. The top sentences by score are returned in
//! document order.

use super::frequency::FrequencyTable;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{RankedSentence, Sentence};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Minimum sentence length in whitespace-delimited words
    pub min_sentence_words: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 5,
            min_sentence_words: 6,
        }
    }
}

/// Score a sentence against a document frequency table
///
/// A sentence without tokens scores `0.0`.
pub fn score_sentence(
    sentence: &Sentence,
    frequencies: &FrequencyTable,
    stopwords: &StopwordFilter,
) -> f64 {
    if sentence.tokens.is_empty() {
        return 0.0;
    }
    let weight: usize = sentence
        .tokens
        .iter()
        .filter(|t| !stopwords.is_stopword(t))
        .map(|t| frequencies.count(t))
        .sum();
    weight as f64 / ((sentence.tokens.len() + 1) as f64).ln()
}

/// Top-k sentence selector
#[derive(Debug)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Set the minimum word count for candidacy
    pub fn with_min_sentence_words(mut self, n: usize) -> Self {
        self.config.min_sentence_words = n;
        self
    }

    /// Whether a sentence is long enough to be selected
    pub fn is_candidate(&self, sentence: &Sentence) -> bool {
        sentence.word_count >= self.config.min_sentence_words
    }

    /// Rank `sentences` and keep the best `num_sentences`, in document order
    ///
    /// Sentences below the word minimum are dropped before scoring. Equal
    /// scores keep their relative input order.
    pub fn select(
        &self,
        sentences: &[Sentence],
        frequencies: &FrequencyTable,
        stopwords: &StopwordFilter,
    ) -> Vec<RankedSentence> {
        let mut scored: Vec<(&Sentence, f64)> = sentences
            .iter()
            .filter(|s| self.is_candidate(s))
            .map(|s| (s, score_sentence(s, frequencies, stopwords)))
            .collect();

        // stable sort, descending
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut selected: Vec<RankedSentence> = scored
            .into_iter()
            .take(self.config.num_sentences)
            .enumerate()
            .map(|(i, (sentence, score))| RankedSentence {
                sentence: sentence.clone(),
                score,
                rank: i + 1,
            })
            .collect();

        // Restore document order
        selected.sort_by_key(|s| s.sentence.index);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn prepare(text: &str) -> (Vec<Sentence>, FrequencyTable, StopwordFilter) {
        let tokenizer = Tokenizer::new();
        let stopwords = StopwordFilter::default();
        let tokens = tokenizer.tokenize(text);
        let freq = FrequencyTable::from_tokens(tokens.iter().map(String::as_str), |t| {
            !stopwords.is_stopword(t)
        });
        (tokenizer.split_sentences(text), freq, stopwords)
    }

    #[test]
    fn test_score_formula() {
        let (sentences, freq, stopwords) =
            prepare("Rust code is fast and safe. Rust tooling helps Rust code ship.");

        // rust=3 code=2 fast=1 safe=1; "is" and "and" are stopwords
        let expected = (3 + 2 + 1 + 1) as f64 / 7f64.ln();
        let score = score_sentence(&sentences[0], &freq, &stopwords);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_score_without_tokens_is_zero() {
        let (sentences, freq, stopwords) = prepare("1 2 3 4 5 6 7.");
        assert_eq!(sentences[0].num_tokens(), 0);
        assert_eq!(score_sentence(&sentences[0], &freq, &stopwords), 0.0);
    }

    #[test]
    fn test_selection_count_and_document_order() {
        let text = "Solar panels convert sunlight into useful electricity. \
                    The weather was pleasant for a long walk outside. \
                    Solar farms store electricity from panels in batteries. \
                    Electricity from solar panels powers many homes today.";
        let (sentences, freq, stopwords) = prepare(text);

        let selected = SentenceSelector::new()
            .with_num_sentences(2)
            .select(&sentences, &freq, &stopwords);

        assert_eq!(selected.len(), 2);
        assert!(selected[0].sentence.index < selected[1].sentence.index);
        assert!(selected.iter().all(|s| s.sentence.index != 1));
        let mut ranks: Vec<_> = selected.iter().map(|s| s.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_short_sentences_never_selected() {
        let text = "Short one here. This sentence has exactly six words. Tiny.";
        let (sentences, freq, stopwords) = prepare(text);

        let selected = SentenceSelector::new()
            .with_num_sentences(10)
            .select(&sentences, &freq, &stopwords);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].sentence.text, "This sentence has exactly six words.");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let text = "Alpha beta gamma delta epsilon zeta. Alpha beta gamma delta epsilon zeta.";
        let (sentences, freq, stopwords) = prepare(text);

        let selected = SentenceSelector::new()
            .with_num_sentences(1)
            .select(&sentences, &freq, &stopwords);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].sentence.index, 0);
    }

    #[test]
    fn test_empty_input() {
        let selector = SentenceSelector::new();
        let selected = selector.select(&[], &FrequencyTable::new(), &StopwordFilter::default());
        assert!(selected.is_empty());
    }
}
