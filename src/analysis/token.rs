//! Token types for morphological analysis.
//!
//! This module defines the core data structures for representing analyzed
//! tokens, which are the units that flow from the tokenizer through the
//! filter chain.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with surface and canonical forms
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! Tokens are ephemeral: they are produced per analyzable unit, consumed by
//! the filter chain, and never stored. Only the canonical form survives as an
//! occurrence-index key.
//!
//! # Examples
//!
//! A token whose analyzer reported a dictionary form:
//!
//! ```
//! use goi::analysis::token::Token;
//!
//! let token = Token::new("食べ", 0).with_canonical("食べる");
//! assert_eq!(token.surface, "食べ");
//! assert_eq!(token.canonical(), "食べる");
//! ```
//!
//! A token with no reported dictionary form falls back to its surface:
//!
//! ```
//! use goi::analysis::token::Token;
//!
//! let token = Token::new("猫", 0);
//! assert_eq!(token.canonical(), "猫");
//! ```

use std::fmt;

/// A token represents a single morpheme produced by the analyzer.
///
/// # Fields
///
/// - `surface` - The token exactly as it appeared in the source text
/// - `canonical` - The dictionary (base) form, when the analyzer reported one
/// - `position` - Position in the token stream (0-based)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The surface form of the token.
    pub surface: String,

    /// The canonical (dictionary) form, if the analyzer reported one.
    ///
    /// `None` when the analyzer's feature set was too short to carry a
    /// canonical form or held only a placeholder. Use [`Token::canonical`]
    /// to read the effective form.
    pub canonical: Option<String>,

    /// The position of the token in the analyzer's output (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given surface form and position.
    pub fn new<S: Into<String>>(surface: S, position: usize) -> Self {
        Token {
            surface: surface.into(),
            canonical: None,
            position,
        }
    }

    /// Set the canonical form for this token.
    pub fn with_canonical<S: Into<String>>(mut self, canonical: S) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    /// The effective canonical form: the reported dictionary form, or the
    /// surface form when the analyzer reported none.
    pub fn canonical(&self) -> &str {
        self.canonical.as_deref().unwrap_or(&self.surface)
    }

    /// Get the byte length of the surface form.
    pub fn len(&self) -> usize {
        self.surface.len()
    }

    /// Check if the surface form is empty.
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)
    }
}

/// A token stream represents a sequence of tokens from the analyzer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("走っ", 0);
        assert_eq!(token.surface, "走っ");
        assert_eq!(token.position, 0);
        assert!(token.canonical.is_none());
    }

    #[test]
    fn test_canonical_fallback() {
        let token = Token::new("猫", 2);
        assert_eq!(token.canonical(), "猫");

        let token = token.with_canonical("ネコ");
        assert_eq!(token.canonical(), "ネコ");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("好き", 0).with_canonical("好き");
        assert_eq!(format!("{token}"), "好き");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![
            Token::new("犬", 0),
            Token::new("も", 1),
            Token::new("好き", 2),
        ];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].surface, "犬");
        assert_eq!(collected[2].surface, "好き");
    }
}
