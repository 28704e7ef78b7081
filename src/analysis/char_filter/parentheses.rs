//! Parenthetical-aside removal.
//!
//! Subtitle transcripts mark speaker names and sound effects in parentheses.
//! This filter removes every parenthesized span before segmentation, treating
//! the ASCII pair `(` `)` and the full-width pair `（` `）` as one delimiter
//! class, so mixed-width pairs like `（雨の音)` are stripped too.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// A parenthesized span: either-width opener, any non-closer run, either-width
/// closer. Spans do not nest.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(（][^)）]*[)）]").expect("parenthetical pattern"));

/// A char filter that strips parenthetical asides.
///
/// # Examples
///
/// ```
/// use goi::analysis::char_filter::CharFilter;
/// use goi::analysis::char_filter::parentheses::ParenthesesCharFilter;
///
/// let filter = ParenthesesCharFilter::new();
/// assert_eq!(filter.filter("（笑い声）こんにちは"), "こんにちは");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParenthesesCharFilter;

impl ParenthesesCharFilter {
    /// Create a new parentheses char filter.
    pub fn new() -> Self {
        ParenthesesCharFilter
    }
}

impl CharFilter for ParenthesesCharFilter {
    fn filter(&self, input: &str) -> String {
        PARENTHETICAL.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "parentheses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        ParenthesesCharFilter::new().filter(input)
    }

    #[test]
    fn test_strip_ascii_parentheses() {
        assert_eq!(strip("前(中)後"), "前後");
        assert_eq!(strip("(全部)"), "");
    }

    #[test]
    fn test_strip_full_width_parentheses() {
        assert_eq!(strip("（拍手）ありがとう"), "ありがとう");
    }

    #[test]
    fn test_mixed_width_pairs() {
        assert_eq!(strip("（雨の音)静かだ"), "静かだ");
        assert_eq!(strip("(ノック音）どうぞ"), "どうぞ");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(strip("a(1)b(2)c"), "abc");
    }

    #[test]
    fn test_unmatched_delimiters_left_alone() {
        assert_eq!(strip("開き(だけ"), "開き(だけ");
        assert_eq!(strip("閉じ)だけ"), "閉じ)だけ");
    }

    #[test]
    fn test_no_parentheses() {
        assert_eq!(strip("そのまま"), "そのまま");
    }
}
