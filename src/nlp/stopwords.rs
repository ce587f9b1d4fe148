//! Stopword filtering
//!
//! The default filter is a small hand-curated English list tuned for
//! encyclopedia prose. Per-language lists from the `stop-words` crate and
//! custom lists are available for callers that need them. Whatever list is
//! chosen is applied identically to frequency counting and sentence scoring.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Hand-curated English function words
pub const CURATED_STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "at", "to", "for", "of", "and", "or", "but",
    "was", "were", "are", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "shall", "that", "this", "these",
    "those", "with", "from", "by", "as", "its", "their", "they", "he", "she", "we", "you",
    "i", "me", "my", "our", "your", "his", "her", "also", "which", "who", "what", "when",
    "where", "how", "not", "no", "so", "if", "then", "than", "there", "about", "up", "out",
    "into", "over", "after", "such", "between", "each", "more", "other", "some", "said",
];

/// A filter for removing stopwords from lowercase tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::curated()
    }
}

impl StopwordFilter {
    /// The curated English list
    pub fn curated() -> Self {
        Self::from_list(CURATED_STOPWORDS)
    }

    /// Load the `stop-words` list for a language code or name
    ///
    /// Only Latin-script languages are accepted, since tokens are ASCII words.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => return Err(SummarizerError::UnsupportedLanguage(language.to_string())),
        };

        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Ok(Self { stopwords })
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check a token against the list. Tokens are expected lowercase.
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_stopwords() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("said"));
        assert!(filter.is_stopword("between"));
        assert!(!filter.is_stopword("quantum"));
        assert!(!filter.is_stopword("computing"));
        assert_eq!(filter.len(), CURATED_STOPWORDS.len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["CUSTOM"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_language_lists() {
        let en = StopwordFilter::for_language("english").unwrap();
        assert!(en.is_stopword("the"));
        assert!(!en.is_stopword("machine"));

        let de = StopwordFilter::for_language("de").unwrap();
        assert!(de.is_stopword("und"));
        assert!(de.is_stopword("die"));
    }

    #[test]
    fn test_unsupported_language() {
        let err = StopwordFilter::for_language("zh").unwrap_err();
        assert!(matches!(err, SummarizerError::UnsupportedLanguage(ref l) if l == "zh"));
    }
}
