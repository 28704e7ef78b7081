use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{GoiError, Result};

use super::Tokenizer;

/// Index of the canonical (dictionary) form in the analyzer's feature list.
///
/// IPADIC-compatible dictionaries lay features out as
/// `part-of-speech,pos-sub1,pos-sub2,pos-sub3,conjugation-type,
/// conjugation-form,base-form,reading,pronunciation`.
const CANONICAL_FEATURE_INDEX: usize = 6;

/// Placeholder the dictionary emits for an absent feature value.
const NO_VALUE: &str = "*";

/// Read the canonical form out of a raw feature list.
///
/// Returns `None` when the list is too short to carry one or holds only the
/// placeholder, so callers fall back to the surface form instead of indexing
/// a sentinel string.
fn canonical_form<S: AsRef<str>>(features: &[S]) -> Option<String> {
    match features.get(CANONICAL_FEATURE_INDEX) {
        Some(value) if value.as_ref() != NO_VALUE => Some(value.as_ref().to_string()),
        _ => None,
    }
}

/// Morphological tokenizer backed by the lindera analyzer.
///
/// Constructed once per request; tokenizing individual units reuses the
/// loaded dictionary.
pub struct LinderaTokenizer {
    inner: Segmenter,
}

impl LinderaTokenizer {
    /// Create a new lindera tokenizer.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str)
            .map_err(|e| GoiError::analysis(format!("Invalid mode '{}': {}", mode_str, e)))?;
        let dict = load_dictionary(dict_uri)
            .map_err(|e| GoiError::analysis(format!("Failed to load dictionary: {}", e)))?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(&uri, metadata).map_err(|e| {
                GoiError::analysis(format!("Failed to load user dictionary: {}", e))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);

        Ok(Self { inner })
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (position, mut morpheme) in self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| GoiError::analysis(format!("Failed to segment text: {}", e)))?
            .into_iter()
            .enumerate()
        {
            let surface = morpheme.surface.to_string();
            let mut token = Token::new(surface, position);
            if let Some(canonical) = canonical_form(&morpheme.details()) {
                token = token.with_canonical(canonical);
            }
            tokens.push(token);
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_from_features() {
        let features = vec![
            "動詞", "自立", "*", "*", "一段", "連用形", "食べる", "タベ", "タベ",
        ];
        assert_eq!(canonical_form(&features), Some("食べる".to_string()));
    }

    #[test]
    fn test_canonical_form_placeholder() {
        let features = vec!["名詞", "固有名詞", "*", "*", "*", "*", "*"];
        assert_eq!(canonical_form(&features), None);
    }

    #[test]
    fn test_canonical_form_short_features() {
        let features = vec!["記号", "一般", "*", "*", "*", "*"];
        assert_eq!(canonical_form(&features), None);

        let empty: Vec<&str> = Vec::new();
        assert_eq!(canonical_form(&empty), None);
    }

    #[test]
    fn test_tokenize_japanese() {
        let tokenizer = LinderaTokenizer::new("normal", "embedded://ipadic", None).unwrap();

        let tokens: Vec<Token> = tokenizer.tokenize("猫が好き。").unwrap().collect();

        assert!(!tokens.is_empty());
        assert_eq!(tokens[0].surface, "猫");
        assert!(tokens.iter().any(|t| t.surface == "好き"));
    }

    #[test]
    fn test_tokenize_lemmatizes_conjugated_verb() {
        let tokenizer = LinderaTokenizer::new("normal", "embedded://ipadic", None).unwrap();

        let tokens: Vec<Token> = tokenizer.tokenize("食べました").unwrap().collect();

        assert!(tokens.iter().any(|t| t.canonical() == "食べる"));
    }

    #[test]
    fn test_tokenizer_name() {
        let tokenizer = LinderaTokenizer::new("normal", "embedded://ipadic", None).unwrap();

        assert_eq!(tokenizer.name(), "lindera");
    }
}
