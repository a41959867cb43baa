//! Lookup tables built from the sentence model

use std::collections::{HashMap, HashSet};

/// Character lookup table with an ASCII fast path
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII characters
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from a list of characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// Case-insensitive abbreviation set
///
/// Entries are stored without their trailing dot, so `"Dr."` and `"Dr"` in
/// the model are equivalent.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// Build from configuration categories
    pub fn from_categories(categories: &HashMap<String, Vec<String>>) -> Self {
        let entries = categories
            .values()
            .flatten()
            .map(|abbr| abbr.trim().trim_end_matches('.').to_lowercase())
            .filter(|abbr| !abbr.is_empty())
            .collect();

        Self { entries }
    }

    /// Whether `word` (without its final dot) is a known abbreviation
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.entries.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
