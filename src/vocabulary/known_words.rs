//! Known-word set construction.
//!
//! A [`KnownWordSet`] holds canonical forms the caller already knows; tokens
//! whose canonical form is a member are suppressed during indexing. Sets are
//! typically built from an exported vocabulary list: a JSON array whose
//! entries are themselves arrays, the first element carrying the word with
//! reading metadata appended after a separator character.
//!
//! ```json
//! [["食べる◴た◴べ◴る", 1, "..."], ["猫◴ね◴こ"], "ignored"]
//! ```
//!
//! The set above contains `食べる` and `猫`; the bare string element does not
//! match the entry shape and is skipped.

use ahash::AHashSet;
use log::warn;

/// Separator between the word and appended reading metadata in an exported
/// vocabulary entry. Only the text before the first occurrence counts.
const ENTRY_SEPARATOR: char = '◴';

/// A set of canonical forms to exclude from the output vocabulary.
///
/// Immutable once built; membership is tested per token during filtering.
#[derive(Clone, Debug, Default)]
pub struct KnownWordSet {
    words: AHashSet<String>,
}

impl KnownWordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        KnownWordSet {
            words: AHashSet::new(),
        }
    }

    /// Create a set from a list of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use goi::vocabulary::known_words::KnownWordSet;
    ///
    /// let known = KnownWordSet::from_words(vec!["食べる", "猫"]);
    /// assert!(known.contains("食べる"));
    /// assert!(!known.contains("犬"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KnownWordSet {
            words: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Build a set from an exported vocabulary list in JSON form.
    ///
    /// Each element that is a non-empty array whose first element is a string
    /// contributes that string truncated at the first separator. Elements of
    /// any other shape are skipped. Malformed JSON degrades to an empty set
    /// rather than failing the request.
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!("known-words source is not valid JSON, ignoring: {e}");
                return Self::new();
            }
        };

        let Some(entries) = value.as_array() else {
            warn!("known-words source is not a JSON array, ignoring");
            return Self::new();
        };

        let mut words = AHashSet::new();
        for entry in entries {
            let Some(first) = entry.as_array().and_then(|items| items.first()) else {
                continue;
            };
            let Some(text) = first.as_str() else {
                continue;
            };
            let word = text.split(ENTRY_SEPARATOR).next().unwrap_or(text);
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }

        KnownWordSet { words }
    }

    /// Check whether a canonical form is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
