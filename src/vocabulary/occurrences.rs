//! Per-word occurrence lookup with deduplication.
//!
//! Looking up one canonical form against an [`OccurrenceIndex`] groups its
//! units by source file, preserving the order sources were first seen, and
//! drops exact duplicate spans. The duplicate check runs over the entire
//! result set, not per group, keyed by `(source, time span, trimmed
//! content)` — the same cue indexed twice for a word shows up once.

use std::sync::Arc;

use ahash::AHashSet;

use crate::document::unit::{TimeSpan, Unit};
use crate::vocabulary::index::OccurrenceIndex;

/// The deduplicated occurrences of one word within one source file.
#[derive(Clone, Debug)]
pub struct SourceOccurrences {
    /// The originating document.
    pub source_id: String,
    /// Deduplicated spans in index order.
    pub spans: Vec<Arc<Unit>>,
}

/// All occurrences of one canonical form, grouped by source.
#[derive(Clone, Debug)]
pub struct WordOccurrences {
    /// The canonical form that was looked up.
    pub form: String,
    /// Groups in first-seen source order.
    pub sources: Vec<SourceOccurrences>,
}

impl WordOccurrences {
    /// Look up a canonical form and build its grouped, deduplicated view.
    ///
    /// A form absent from the index yields an empty result, not an error.
    pub fn collect(index: &OccurrenceIndex, form: &str) -> Self {
        let mut sources: Vec<SourceOccurrences> = Vec::new();
        let mut seen: AHashSet<(&str, Option<TimeSpan>, &str)> = AHashSet::new();

        for unit in index.occurrences(form) {
            let key = (unit.source_id.as_str(), unit.time, unit.content.trim());
            if !seen.insert(key) {
                continue;
            }

            match sources
                .iter_mut()
                .find(|group| group.source_id == unit.source_id)
            {
                Some(group) => group.spans.push(Arc::clone(unit)),
                None => sources.push(SourceOccurrences {
                    source_id: unit.source_id.clone(),
                    spans: vec![Arc::clone(unit)],
                }),
            }
        }

        WordOccurrences {
            form: form.to_string(),
            sources,
        }
    }

    /// Whether the lookup found no occurrences.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total deduplicated spans across all sources.
    pub fn total_spans(&self) -> usize {
        self.sources.iter().map(|group| group.spans.len()).sum()
    }
}
