//! Keyword extraction
//!
//! Keywords are the most frequent non-stopword tokens above a minimum
//! length. Equal counts are ordered by first occurrence in the text; other
//! implementations of the same heuristic may order ties differently.

use super::frequency::FrequencyTable;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Keyword;

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Tokens shorter than this are ignored
    min_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self { min_len: 4 }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum keyword length in characters
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Up to `top_n` keywords from `tokens`, most frequent first
    pub fn extract<'a, I>(&self, tokens: I, stopwords: &StopwordFilter, top_n: usize) -> Vec<Keyword>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let table = FrequencyTable::from_tokens(tokens, |t| {
            t.len() >= self.min_len && !stopwords.is_stopword(t)
        });

        table
            .most_common(top_n)
            .into_iter()
            .map(|(word, count)| Keyword {
                word: word.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_most_frequent_first() {
        let tokens = words("quantum computing computing computing qubits qubits");
        let keywords = KeywordExtractor::new().extract(tokens, &StopwordFilter::default(), 2);

        assert_eq!(
            keywords,
            vec![
                Keyword {
                    word: "computing".to_string(),
                    count: 3
                },
                Keyword {
                    word: "qubits".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_short_words_and_stopwords_excluded() {
        // "their", "which", "between" are curated stopwords; "cat" is too short
        let tokens = words("cat cat cat their their which between lion");
        let keywords = KeywordExtractor::new().extract(tokens, &StopwordFilter::default(), 6);

        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].word, "lion");
    }

    #[test]
    fn test_custom_min_len() {
        let tokens = words("cat cat dog");
        let keywords = KeywordExtractor::new()
            .with_min_len(3)
            .extract(tokens, &StopwordFilter::empty(), 5);

        let found: Vec<_> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(found, vec!["cat", "dog"]);
    }

    #[test]
    fn test_no_tokens() {
        let keywords = KeywordExtractor::new().extract(Vec::<&str>::new(), &StopwordFilter::default(), 6);
        assert!(keywords.is_empty());
    }
}
