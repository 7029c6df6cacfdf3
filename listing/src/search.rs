//! Accent- and punctuation-insensitive substring search over arbitrary records.

use unicode_normalization::UnicodeNormalization;

/// Accessor returning the searchable text of one field of a record.
///
/// Multi-valued fields (tags, links) return one entry per value.
pub type FieldSelector<T> = fn(&T) -> Vec<&str>;

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

fn is_word_or_space(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Fold text into its comparable form.
///
/// Lower-cases, decomposes (NFD), drops combining diacritics and finally
/// drops anything that is neither a word character nor whitespace.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .filter(|c| is_word_or_space(*c))
        .collect()
}

/// A parsed, normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    normalized: String,
}

impl TextQuery {
    /// Returns `None` for blank input, which callers treat as "match everything".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            normalized: normalize_text(raw),
        })
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn matches_text(&self, candidate: &str) -> bool {
        normalize_text(candidate).contains(&self.normalized)
    }

    /// True when any value of any selected field contains the query.
    pub fn matches<T>(&self, item: &T, selectors: &[FieldSelector<T>]) -> bool {
        selectors
            .iter()
            .any(|select| select(item).into_iter().any(|value| self.matches_text(value)))
    }
}

/// Positions of the items matching `query`, in collection order.
pub fn search_indices<T>(items: &[T], query: &str, selectors: &[FieldSelector<T>]) -> Vec<usize> {
    match TextQuery::parse(query) {
        None => (0..items.len()).collect(),
        Some(query) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.matches(*item, selectors))
            .map(|(idx, _)| idx)
            .collect(),
    }
}

/// Filter `items` down to those matching `query` on at least one field.
///
/// A blank query returns every item. Order is preserved.
pub fn search<'a, T>(items: &'a [T], query: &str, selectors: &[FieldSelector<T>]) -> Vec<&'a T> {
    match TextQuery::parse(query) {
        None => items.iter().collect(),
        Some(query) => items
            .iter()
            .filter(|item| query.matches(*item, selectors))
            .collect(),
    }
}
