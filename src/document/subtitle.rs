//! SubRip (`.srt`) cue parsing.
//!
//! Parses a decoded subtitle file into an ordered cue list. The parser is
//! tolerant of CRLF line endings, a leading BOM, a missing index line, and a
//! `.` millisecond separator, but any block whose structure cannot be read
//! fails the whole file: the loader skips such a file and records a warning
//! instead of indexing a partial transcript.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::unit::{CueTime, TimeSpan};
use crate::error::{GoiError, Result};

/// Timing line: `00:00:01,000 --> 00:00:02,500`.
static TIMING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})[,.](\d{1,3})\s*-->\s*(\d+):(\d{2}):(\d{2})[,.](\d{1,3})\s*$")
        .expect("timing pattern")
});

/// One parsed subtitle cue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue {
    /// Cue display span.
    pub span: TimeSpan,
    /// Cue body, lines joined with `\n`. May trim to empty; the loader
    /// discards such cues.
    pub text: String,
}

/// Parse a decoded subtitle file into its ordered cue list.
pub fn parse(input: &str) -> Result<Vec<Cue>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut cues = Vec::new();
    for (block_no, block) in normalized
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .enumerate()
    {
        cues.push(parse_block(block, block_no)?);
    }

    Ok(cues)
}

fn parse_block(block: &str, block_no: usize) -> Result<Cue> {
    let lines: Vec<&str> = block.lines().collect();

    let (timing_line, text_start) = match lines.first() {
        Some(first) if TIMING.is_match(first.trim()) => (first.trim(), 1),
        Some(first) if first.trim().parse::<u64>().is_ok() => match lines.get(1) {
            Some(second) if TIMING.is_match(second.trim()) => (second.trim(), 2),
            _ => {
                return Err(GoiError::parse(format!(
                    "cue {}: expected a timing line after the index",
                    block_no + 1
                )));
            }
        },
        _ => {
            return Err(GoiError::parse(format!(
                "cue {}: expected an index or timing line",
                block_no + 1
            )));
        }
    };

    let span = parse_timing(timing_line).ok_or_else(|| {
        GoiError::parse(format!("cue {}: malformed timing line", block_no + 1))
    })?;

    Ok(Cue {
        span,
        text: lines[text_start..].join("\n"),
    })
}

fn parse_timing(line: &str) -> Option<TimeSpan> {
    let caps = TIMING.captures(line)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());

    let start = CueTime::new(field(1)?, field(2)?, field(3)?, field(4)?);
    let end = CueTime::new(field(5)?, field(6)?, field(7)?, field(8)?);
    Some(TimeSpan::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "1\n00:00:01,000 --> 00:00:02,500\nこんにちは\n\n2\n00:00:03,000 --> 00:00:04,000\nさようなら\n";

    #[test]
    fn test_parse_basic_file() {
        let cues = parse(BASIC).unwrap();

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "こんにちは");
        assert_eq!(cues[0].span.start, CueTime::new(0, 0, 1, 0));
        assert_eq!(cues[0].span.end, CueTime::new(0, 0, 2, 500));
        assert_eq!(cues[1].text, "さようなら");
    }

    #[test]
    fn test_parse_crlf_and_bom() {
        let input = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000\r\nテスト\r\n";
        let cues = parse(input).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "テスト");
    }

    #[test]
    fn test_parse_multiline_cue_text() {
        let input = "1\n00:00:01,000 --> 00:00:02,000\n一行目\n二行目\n";
        let cues = parse(input).unwrap();

        assert_eq!(cues[0].text, "一行目\n二行目");
    }

    #[test]
    fn test_parse_without_index_line() {
        let input = "00:00:01,000 --> 00:00:02,000\n本文\n";
        let cues = parse(input).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "本文");
    }

    #[test]
    fn test_parse_dot_millisecond_separator() {
        let input = "1\n00:00:01.000 --> 00:00:02.000\n本文\n";
        let cues = parse(input).unwrap();

        assert_eq!(cues[0].span.end, CueTime::new(0, 0, 2, 0));
    }

    #[test]
    fn test_malformed_timing_fails_file() {
        let input = "1\nnot a timing line\n本文\n";
        assert!(parse(input).is_err());

        let input = "garbage\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_empty_input_yields_no_cues() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_cue_with_empty_body() {
        let input = "1\n00:00:01,000 --> 00:00:02,000\n";
        let cues = parse(input).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "");
    }
}
