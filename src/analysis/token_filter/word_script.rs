//! Word-script filter implementation.
//!
//! Rejects tokens whose surface contains anything outside word characters and
//! the Japanese syllabic/ideographic ranges. Punctuation, symbols, and
//! whitespace runs produced by the analyzer never reach the index when this
//! filter is active.
//!
//! # Examples
//!
//! ```
//! use goi::analysis::token::Token;
//! use goi::analysis::token_filter::TokenFilter;
//! use goi::analysis::token_filter::word_script::WordScriptFilter;
//!
//! let filter = WordScriptFilter::new();
//!
//! assert!(!filter.rejects(&Token::new("好き", 0)));
//! assert!(filter.rejects(&Token::new("。", 1)));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::Token;
use crate::analysis::token_filter::TokenFilter;

/// Word characters plus hiragana/katakana (U+3040–U+30FF) and CJK ideographs
/// (U+4E00–U+9FFF), matched over the entire surface.
static WORD_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\u{3040}-\u{30FF}\u{4E00}-\u{9FFF}]+$").expect("word script pattern")
});

/// The interpunct sits inside the katakana block but is rejected standalone.
const INTERPUNCT: &str = "・";

/// A filter that rejects tokens containing non-word, non-Japanese characters.
#[derive(Clone, Debug, Default)]
pub struct WordScriptFilter;

impl WordScriptFilter {
    /// Create a new word-script filter.
    pub fn new() -> Self {
        WordScriptFilter
    }
}

impl TokenFilter for WordScriptFilter {
    fn rejects(&self, token: &Token) -> bool {
        token.surface == INTERPUNCT || !WORD_SCRIPT.is_match(&token.surface)
    }

    fn name(&self) -> &'static str {
        "word_script"
    }
}
