//! Word frequency table.

use std::cmp::Ordering;
use std::fmt;

use dsa_forest::BinarySearchTree;
use tracing::debug;

/// A word and how many times it has been seen.
///
/// Ordering and equality look at the word only, so a pair can be found in a
/// tree by word and its count bumped in place.
#[derive(Clone, Debug)]
pub struct FrequencyPair {
    word: String,
    count: usize,
}

impl FrequencyPair {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: 1,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn bump(&mut self) {
        self.count += 1;
    }
}

impl PartialEq for FrequencyPair {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for FrequencyPair {}

impl PartialOrd for FrequencyPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrequencyPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl fmt::Display for FrequencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Occurrence counts of normalized words.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    tree: BinarySearchTree<FrequencyPair>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every word of `text`. Words are split on whitespace, stripped
    /// of punctuation and lowercased; words left empty are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for word in dsa_util::words(text) {
            table.add(word);
        }
        debug!(distinct = table.len(), total = table.total, "frequency table built");
        table
    }

    /// Counts one already-normalized word.
    pub fn add(&mut self, word: impl Into<String>) {
        let pair = FrequencyPair::new(word);
        if !self.tree.modify(&pair, FrequencyPair::bump) {
            self.tree.insert(pair);
        }
        self.total += 1;
    }

    /// Count for `word`, 0 when it was never seen.
    pub fn count(&self, word: &str) -> usize {
        self.tree
            .contains(&FrequencyPair::new(word))
            .get()
            .map_or(0, FrequencyPair::count)
    }

    /// Distinct words.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Words counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Pairs in alphabetical order, walked with a cursor from `begin()`.
    pub fn alphabetical(&self) -> Vec<&FrequencyPair> {
        let mut out = Vec::with_capacity(self.len());
        let mut it = self.tree.begin();
        while let Some(pair) = it.get() {
            out.push(pair);
            it.move_next();
        }
        out
    }

    /// Pairs by descending count; equal counts stay alphabetical.
    pub fn by_frequency(&self) -> Vec<&FrequencyPair> {
        let mut out: Vec<&FrequencyPair> = self.tree.iter().collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }

    /// The two-part report printed by `word-freq`.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("\n======== Sorted alphabetically ========\n");
        for pair in self.alphabetical() {
            out.push_str(&format!("{pair}\n"));
        }
        out.push_str("\n========= Sorted by frequency =========\n");
        for pair in self.by_frequency() {
            out.push_str(&format!("{pair}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_compare_by_word_only() {
        let mut a = FrequencyPair::new("apple");
        a.bump();
        let b = FrequencyPair::new("apple");
        assert_eq!(a, b);
        assert_eq!(a.count(), 2);
        assert!(FrequencyPair::new("apple") < FrequencyPair::new("banana"));
        assert_eq!(a.to_string(), "apple: 2");
    }

    #[test]
    fn add_bumps_existing_words() {
        let mut t = FrequencyTable::new();
        t.add("b");
        t.add("a");
        t.add("b");
        assert_eq!(t.len(), 2);
        assert_eq!(t.total(), 3);
        assert_eq!(t.count("b"), 2);
        assert_eq!(t.count("a"), 1);
        assert_eq!(t.count("c"), 0);
    }
}
