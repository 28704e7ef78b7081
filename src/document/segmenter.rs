//! Sentence segmentation for continuous text.
//!
//! Japanese prose is split on the terminal marker `。`. Each fragment keeps
//! its marker, so segmentation loses nothing except surrounding whitespace; a
//! trailing fragment on text that does not end with the marker is emitted
//! as-is.

/// The terminal sentence marker.
pub const SENTENCE_TERMINATOR: char = '。';

/// Splits continuous text into sentence strings.
///
/// # Examples
///
/// ```
/// use goi::document::segmenter::SentenceSegmenter;
///
/// let segmenter = SentenceSegmenter::new();
/// let sentences = segmenter.segment("猫が好き。犬も好き。");
/// assert_eq!(sentences, vec!["猫が好き。", "犬も好き。"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new sentence segmenter.
    pub fn new() -> Self {
        SentenceSegmenter
    }

    /// Split text on the terminal marker.
    ///
    /// Fragments that are empty after trimming are dropped. Every emitted
    /// fragment before a marker has the marker re-appended; the trailing
    /// fragment of unterminated text is emitted without one.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut parts = text.split(SENTENCE_TERMINATOR).peekable();

        while let Some(part) = parts.next() {
            let trimmed = part.trim();
            let is_trailing = parts.peek().is_none();
            if trimmed.is_empty() {
                continue;
            }
            if is_trailing {
                sentences.push(trimmed.to_string());
            } else {
                sentences.push(format!("{trimmed}{SENTENCE_TERMINATOR}"));
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_segment_terminated_text() {
        assert_eq!(segment("猫が好き。犬も好き。"), vec!["猫が好き。", "犬も好き。"]);
    }

    #[test]
    fn test_trailing_fragment_keeps_no_marker() {
        assert_eq!(segment("終わった。まだ途中"), vec!["終わった。", "まだ途中"]);
        assert_eq!(segment("まだ途中"), vec!["まだ途中"]);
    }

    #[test]
    fn test_whitespace_between_sentences() {
        assert_eq!(segment("一。\n  二。\n"), vec!["一。", "二。"]);
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert_eq!(segment("。。。"), Vec::<String>::new());
        assert_eq!(segment(""), Vec::<String>::new());
        assert_eq!(segment("   "), Vec::<String>::new());
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let once = segment("猫が好き。");
        assert_eq!(once, vec!["猫が好き。"]);

        let twice = segment(&once[0]);
        assert_eq!(twice, once);
    }
}
