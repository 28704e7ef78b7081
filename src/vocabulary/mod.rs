//! Vocabulary extraction: the occurrence index, its ranked view, per-word
//! occurrence detail, and the request pipeline that builds them.

pub mod extractor;
pub mod index;
pub mod known_words;
pub mod occurrences;
pub mod report;

// Re-export commonly used types
pub use extractor::{ExtractOptions, ExtractionResult, VocabularyExtractor};
pub use index::OccurrenceIndex;
pub use known_words::KnownWordSet;
pub use occurrences::{SourceOccurrences, WordOccurrences};
pub use report::{VocabularyEntry, VocabularyReport};
