//! Alphanumeric filter implementation.
//!
//! Rejects tokens that are nothing but ASCII alphanumerics or nothing but
//! their full-width equivalents: bare numbers, romanized fragments, and
//! full-width digit runs common in subtitle files.
//!
//! # Examples
//!
//! ```
//! use goi::analysis::token::Token;
//! use goi::analysis::token_filter::TokenFilter;
//! use goi::analysis::token_filter::alphanumeric::AlphanumericFilter;
//!
//! let filter = AlphanumericFilter::new();
//!
//! assert!(filter.rejects(&Token::new("2024", 0)));
//! assert!(filter.rejects(&Token::new("ＯＫ", 1)));
//! assert!(!filter.rejects(&Token::new("食べる", 2)));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::Token;
use crate::analysis::token_filter::TokenFilter;

/// Entirely ASCII alphanumeric, or entirely full-width alphanumeric.
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9]+|[Ａ-Ｚａ-ｚ０-９]+)$").expect("alphanumeric pattern")
});

/// A filter that rejects purely numeric or romanized tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl TokenFilter for AlphanumericFilter {
    fn rejects(&self, token: &Token) -> bool {
        ALPHANUMERIC.is_match(&token.surface)
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
