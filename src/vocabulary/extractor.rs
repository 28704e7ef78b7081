//! The extraction pipeline.
//!
//! [`VocabularyExtractor`] runs one request end to end: load and segment the
//! uploaded files, tokenize every unit, screen tokens through the filter
//! chain, and build the occurrence index plus its ranked vocabulary view.
//! The whole run is request-scoped and returns an explicit
//! [`ExtractionResult`]; callers hand that result to the per-word lookup
//! rather than reading shared state.

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::token::Token;
use crate::analysis::token_filter::{
    AlphanumericFilter, FilterChain, KnownWordsFilter, WordScriptFilter,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::document::loader::{DocumentLoader, SourceFile};
use crate::error::{GoiError, Result};
use crate::vocabulary::index::OccurrenceIndex;
use crate::vocabulary::known_words::KnownWordSet;
use crate::vocabulary::occurrences::WordOccurrences;
use crate::vocabulary::report::VocabularyReport;

/// Options controlling one extraction request.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractOptions {
    /// Strip parenthetical asides before segmentation.
    pub ignore_parentheticals: bool,
    /// Drop tokens containing non-word, non-Japanese characters.
    pub filter_nonwords: bool,
    /// Drop purely numeric or romanized tokens.
    pub filter_numeric_or_romanized: bool,
}

/// The completed result of one extraction request.
///
/// Owns the occurrence index; per-word lookups go through
/// [`ExtractionResult::occurrences`].
#[derive(Debug)]
pub struct ExtractionResult {
    /// The occurrence index built by this request.
    pub index: OccurrenceIndex,
    /// The ranked vocabulary view plus scalar counts.
    pub report: VocabularyReport,
    /// Per-file skip reasons collected during loading.
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// The grouped, deduplicated occurrence detail for one canonical form.
    pub fn occurrences(&self, form: &str) -> WordOccurrences {
        WordOccurrences::collect(&self.index, form)
    }
}

/// Runs the extraction pipeline over uploaded files.
pub struct VocabularyExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl VocabularyExtractor {
    /// Create an extractor around a tokenizer. The tokenizer is constructed
    /// once and reused across every unit of every request.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        VocabularyExtractor { tokenizer }
    }

    /// Run one extraction request.
    ///
    /// Fails only when no supplied file has a recognized kind or when the
    /// tokenizer itself errors; everything else degrades gracefully (see the
    /// loader's warning list).
    pub fn extract(
        &self,
        files: &[SourceFile],
        known_words: &KnownWordSet,
        options: &ExtractOptions,
    ) -> Result<ExtractionResult> {
        let loader = DocumentLoader::new(options.ignore_parentheticals);
        let batch = loader.load(files);

        if batch.recognized_files == 0 {
            return Err(GoiError::invalid_argument(
                "no usable files: expected at least one .srt or .txt source",
            ));
        }

        let chain = build_chain(known_words, options);
        debug!(
            "extracting from {} units with {} active filters",
            batch.units.len(),
            chain.len()
        );

        // Tokenization dominates the run time and each unit is independent;
        // fan out across units and rejoin in unit order.
        let token_lists: Vec<Vec<Token>> = batch
            .units
            .par_iter()
            .map(|unit| {
                self.tokenizer
                    .tokenize(&unit.content)
                    .map(|stream| stream.collect())
            })
            .collect::<Result<_>>()?;

        let mut index = OccurrenceIndex::new();
        for (unit, tokens) in batch.units.into_iter().zip(token_lists) {
            let unit = Arc::new(unit);
            for token in tokens {
                if chain.rejects(&token) {
                    continue;
                }
                index.register(token.canonical(), Arc::clone(&unit));
            }
        }

        info!(
            "extraction found {} distinct forms ({} known words suppressed from matching)",
            index.len(),
            known_words.len()
        );

        let report = VocabularyReport::new(index.vocabulary(), known_words.len());

        Ok(ExtractionResult {
            index,
            report,
            warnings: batch.warnings,
        })
    }
}

/// Assemble the per-request filter chain from the active options.
fn build_chain(known_words: &KnownWordSet, options: &ExtractOptions) -> FilterChain {
    let mut chain = FilterChain::new();
    if options.filter_nonwords {
        chain = chain.add_filter(Arc::new(WordScriptFilter::new()));
    }
    if options.filter_numeric_or_romanized {
        chain = chain.add_filter(Arc::new(AlphanumericFilter::new()));
    }
    if !known_words.is_empty() {
        chain = chain.add_filter(Arc::new(KnownWordsFilter::new(known_words.clone())));
    }
    chain
}
