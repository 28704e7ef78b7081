//! Vocabulary report types.

use serde::{Deserialize, Serialize};

/// One ranked vocabulary entry: a canonical form and its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The canonical (dictionary) form.
    pub form: String,
    /// How many occurrences were indexed for the form.
    pub count: usize,
}

/// The result of a vocabulary extraction: the ranked entry list plus the
/// scalar counts reported to the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyReport {
    /// Entries sorted by count descending, stable among equal counts.
    pub entries: Vec<VocabularyEntry>,
    /// Size of the known-word set the caller supplied.
    pub known_word_count: usize,
    /// Distinct canonical forms found (after filtering).
    pub new_word_count: usize,
}

impl VocabularyReport {
    /// Build a report from ranked entries and the supplied known-word count.
    pub fn new(entries: Vec<VocabularyEntry>, known_word_count: usize) -> Self {
        let new_word_count = entries.len();
        VocabularyReport {
            entries,
            known_word_count,
            new_word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_count_tracks_entries() {
        let report = VocabularyReport::new(
            vec![
                VocabularyEntry {
                    form: "好き".to_string(),
                    count: 2,
                },
                VocabularyEntry {
                    form: "猫".to_string(),
                    count: 1,
                },
            ],
            10,
        );

        assert_eq!(report.new_word_count, 2);
        assert_eq!(report.known_word_count, 10);
    }

    #[test]
    fn test_report_serializes() {
        let report = VocabularyReport::new(Vec::new(), 0);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"new_word_count\":0"));
    }
}
