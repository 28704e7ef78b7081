//! Char filter implementations for text normalization.
//!
//! Char filters pre-process raw source text before it is split into units
//! and tokenized.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod parentheses;

pub use parentheses::ParenthesesCharFilter;
