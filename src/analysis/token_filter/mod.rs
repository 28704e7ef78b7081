//! Token filter implementations for token screening.
//!
//! Filters are named predicates over a single [`Token`]. A [`FilterChain`]
//! composes them in order with short-circuit semantics: the first filter that
//! rejects a token removes it from further processing, and a rejected token
//! contributes to no occurrence-index entry.

use std::sync::Arc;

use crate::analysis::token::Token;

/// Trait for filters that screen individual tokens.
pub trait TokenFilter: Send + Sync {
    /// Whether this filter rejects the given token.
    fn rejects(&self, token: &Token) -> bool;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An ordered chain of token filters with reject-on-first-match semantics.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use goi::analysis::token::Token;
/// use goi::analysis::token_filter::FilterChain;
/// use goi::analysis::token_filter::alphanumeric::AlphanumericFilter;
///
/// let chain = FilterChain::new().add_filter(Arc::new(AlphanumericFilter::new()));
///
/// assert!(chain.rejects(&Token::new("2024", 0)));
/// assert!(!chain.rejects(&Token::new("猫", 1)));
/// ```
#[derive(Clone, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl FilterChain {
    /// Create an empty filter chain. An empty chain rejects nothing.
    pub fn new() -> Self {
        FilterChain {
            filters: Vec::new(),
        }
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Whether any filter in the chain rejects the token.
    pub fn rejects(&self, token: &Token) -> bool {
        self.filters.iter().any(|filter| filter.rejects(token))
    }

    /// Get the number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

// Individual filter modules
pub mod alphanumeric;
pub mod known_words;
pub mod word_script;

// Re-export all filters for convenient access
pub use alphanumeric::AlphanumericFilter;
pub use known_words::KnownWordsFilter;
pub use word_script::WordScriptFilter;

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectSurface(&'static str);

    impl TokenFilter for RejectSurface {
        fn rejects(&self, token: &Token) -> bool {
            token.surface == self.0
        }

        fn name(&self) -> &'static str {
            "reject_surface"
        }
    }

    #[test]
    fn test_empty_chain_rejects_nothing() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert!(!chain.rejects(&Token::new("anything", 0)));
    }

    #[test]
    fn test_chain_short_circuits_on_first_match() {
        let chain = FilterChain::new()
            .add_filter(Arc::new(RejectSurface("a")))
            .add_filter(Arc::new(RejectSurface("b")));

        assert_eq!(chain.len(), 2);
        assert!(chain.rejects(&Token::new("a", 0)));
        assert!(chain.rejects(&Token::new("b", 1)));
        assert!(!chain.rejects(&Token::new("c", 2)));
    }
}
