//! # goi
//!
//! Japanese vocabulary extraction and frequency analysis for subtitles and
//! text, built around a morphological analyzer.
//!
//! ## Features
//!
//! - Subtitle (`.srt`) and plain-text (`.txt`) ingestion with lossy decoding
//! - Sentence segmentation on the Japanese terminal marker
//! - Lemma-keyed occurrence indexing via morphological analysis
//! - Composable token filters (script class, alphanumerics, known words)
//! - Frequency-ranked vocabulary reports with stable tie ordering
//! - Per-word occurrence lookup, grouped by source and deduplicated

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
