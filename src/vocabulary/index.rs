//! The occurrence index.
//!
//! Maps each canonical form to the ordered list of units it occurred in.
//! Units are shared by reference: several tokens from one unit each append
//! the same `Arc<Unit>` to their forms' lists. The index also remembers the
//! order in which forms were first registered, which the vocabulary view uses
//! as its tie-break order.

use std::sync::Arc;

use ahash::AHashMap;

use crate::document::unit::Unit;
use crate::vocabulary::report::VocabularyEntry;

/// Mapping from canonical form to the units it occurred in.
///
/// Built fresh per extraction request; immutable once returned to the caller.
#[derive(Debug, Default)]
pub struct OccurrenceIndex {
    entries: AHashMap<String, Vec<Arc<Unit>>>,
    /// Canonical forms in first-registration order.
    order: Vec<String>,
}

impl OccurrenceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        OccurrenceIndex {
            entries: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Append a unit occurrence under a canonical form.
    ///
    /// The same form occurring several times in one unit registers that unit
    /// once per occurrence.
    pub fn register(&mut self, canonical: &str, unit: Arc<Unit>) {
        match self.entries.get_mut(canonical) {
            Some(list) => list.push(unit),
            None => {
                self.order.push(canonical.to_string());
                self.entries.insert(canonical.to_string(), vec![unit]);
            }
        }
    }

    /// The ordered occurrence list for a form. An absent form yields an
    /// empty slice, not an error.
    pub fn occurrences(&self, canonical: &str) -> &[Arc<Unit>] {
        self.entries
            .get(canonical)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the form has been registered.
    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.contains_key(canonical)
    }

    /// Number of distinct canonical forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical forms in first-registration order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Derive the frequency-ranked vocabulary view.
    ///
    /// Entries are sorted by count descending; the sort is stable, so equal
    /// counts keep their first-registration order.
    pub fn vocabulary(&self) -> Vec<VocabularyEntry> {
        let mut entries: Vec<VocabularyEntry> = self
            .order
            .iter()
            .map(|form| VocabularyEntry {
                form: form.clone(),
                count: self.entries.get(form).map_or(0, Vec::len),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(source: &str, content: &str) -> Arc<Unit> {
        Arc::new(Unit::sentence(source, content))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut index = OccurrenceIndex::new();
        let u = unit("a.txt", "猫が好き。");

        index.register("猫", Arc::clone(&u));
        index.register("好き", Arc::clone(&u));

        assert_eq!(index.len(), 2);
        assert!(index.contains("猫"));
        assert_eq!(index.occurrences("猫").len(), 1);
        assert_eq!(index.occurrences("猫")[0].content, "猫が好き。");
    }

    #[test]
    fn test_missing_form_yields_empty_slice() {
        let index = OccurrenceIndex::new();
        assert!(index.occurrences("ない").is_empty());
    }

    #[test]
    fn test_duplicate_occurrences_in_one_unit_all_append() {
        let mut index = OccurrenceIndex::new();
        let u = unit("a.txt", "好き好き。");

        index.register("好き", Arc::clone(&u));
        index.register("好き", Arc::clone(&u));

        assert_eq!(index.occurrences("好き").len(), 2);
    }

    #[test]
    fn test_vocabulary_counts_match_list_lengths() {
        let mut index = OccurrenceIndex::new();
        let u1 = unit("a.txt", "猫が好き。");
        let u2 = unit("a.txt", "犬も好き。");

        index.register("猫", Arc::clone(&u1));
        index.register("好き", Arc::clone(&u1));
        index.register("犬", Arc::clone(&u2));
        index.register("好き", Arc::clone(&u2));

        let vocabulary = index.vocabulary();
        assert_eq!(vocabulary[0].form, "好き");
        assert_eq!(vocabulary[0].count, 2);

        for entry in &vocabulary {
            assert_eq!(entry.count, index.occurrences(&entry.form).len());
        }
    }

    #[test]
    fn test_vocabulary_ties_keep_first_registration_order() {
        let mut index = OccurrenceIndex::new();
        let u = unit("a.txt", "順序。");

        index.register("三", Arc::clone(&u));
        index.register("一", Arc::clone(&u));
        index.register("二", Arc::clone(&u));

        let forms: Vec<&str> = index.vocabulary().iter().map(|e| e.form.as_str()).collect();
        assert_eq!(forms, vec!["三", "一", "二"]);
    }
}
