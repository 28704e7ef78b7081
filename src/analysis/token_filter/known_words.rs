//! Known-word suppression filter.
//!
//! Rejects tokens whose canonical form is already in the caller's
//! [`KnownWordSet`], so familiar vocabulary never reaches the index.
//!
//! # Examples
//!
//! ```
//! use goi::analysis::token::Token;
//! use goi::analysis::token_filter::TokenFilter;
//! use goi::analysis::token_filter::known_words::KnownWordsFilter;
//! use goi::vocabulary::known_words::KnownWordSet;
//!
//! let filter = KnownWordsFilter::new(KnownWordSet::from_words(vec!["食べる"]));
//!
//! // Canonical form is matched, not the surface.
//! assert!(filter.rejects(&Token::new("食べ", 0).with_canonical("食べる")));
//! assert!(!filter.rejects(&Token::new("猫", 1)));
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_filter::TokenFilter;
use crate::vocabulary::known_words::KnownWordSet;

/// A filter that rejects tokens whose canonical form is already known.
#[derive(Clone, Debug)]
pub struct KnownWordsFilter {
    known: KnownWordSet,
}

impl KnownWordsFilter {
    /// Create a new known-words filter over the given set.
    pub fn new(known: KnownWordSet) -> Self {
        KnownWordsFilter { known }
    }

    /// Get the number of known words backing this filter.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Check if the backing set is empty.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl TokenFilter for KnownWordsFilter {
    fn rejects(&self, token: &Token) -> bool {
        self.known.contains(token.canonical())
    }

    fn name(&self) -> &'static str {
        "known_words"
    }
}
