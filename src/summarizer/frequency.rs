//! Term frequency table
//!
//! Counts tokens while remembering the order in which each distinct token
//! was first seen, so ranking by count can fall back to first occurrence.

use rustc_hash::FxHashMap;

/// Token occurrence counts for a document
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Distinct tokens with their counts, in first-seen order
    entries: Vec<(String, usize)>,
    /// Token -> position in `entries`
    index: FxHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token accepted by `keep`
    pub fn from_tokens<'a, I, F>(tokens: I, keep: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> bool,
    {
        let mut table = Self::new();
        for token in tokens {
            if keep(token) {
                table.add(token);
            }
        }
        table
    }

    /// Record one occurrence of `token`
    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Occurrences of `token`, zero if never counted
    #[inline]
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all tokens
    pub fn total(&self) -> usize {
        self.total
    }

    /// Up to `n` tokens by descending count
    ///
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        // stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_totals() {
        let tokens = ["rust", "is", "fast", "rust", "is", "safe", "rust"];
        let table = FrequencyTable::from_tokens(tokens, |_| true);

        assert_eq!(table.count("rust"), 3);
        assert_eq!(table.count("is"), 2);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_keep_predicate_filters() {
        let tokens = ["the", "cat", "the", "hat"];
        let table = FrequencyTable::from_tokens(tokens, |t| t != "the");

        assert_eq!(table.count("the"), 0);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let tokens = ["beta", "alpha", "gamma", "alpha", "beta", "delta"];
        let table = FrequencyTable::from_tokens(tokens, |_| true);

        let top = table.most_common(3);
        assert_eq!(top, vec![("beta", 2), ("alpha", 2), ("gamma", 1)]);
    }

    #[test]
    fn test_most_common_more_than_available() {
        let table = FrequencyTable::from_tokens(["one"], |_| true);
        assert_eq!(table.most_common(10), vec![("one", 1)]);
        assert!(FrequencyTable::new().most_common(3).is_empty());
    }
}
