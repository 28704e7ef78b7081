//! The unit model shared by every source kind.
//!
//! A [`Unit`] is one analyzable span of source text: a subtitle cue or a
//! segmented sentence. Units are created by the loader, are immutable
//! thereafter, and are shared into the occurrence index behind `Arc` rather
//! than copied per token.

use std::fmt;
use std::time::Duration;

/// A point in subtitle time, displayed in the `HH:MM:SS,mmm` cue form.
///
/// # Examples
///
/// ```
/// use goi::document::unit::CueTime;
///
/// let t = CueTime::new(0, 1, 2, 345);
/// assert_eq!(t.to_string(), "00:01:02,345");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CueTime(Duration);

impl CueTime {
    /// Create a cue time from hour/minute/second/millisecond components.
    pub fn new(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Self {
        CueTime(Duration::from_millis(
            ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
        ))
    }

    /// Create a cue time from a total millisecond count.
    pub fn from_millis(millis: u64) -> Self {
        CueTime(Duration::from_millis(millis))
    }

    /// Total milliseconds since the start of the source.
    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl fmt::Display for CueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_millis();
        let millis = total % 1000;
        let seconds = (total / 1000) % 60;
        let minutes = (total / 60_000) % 60;
        let hours = total / 3_600_000;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
    }
}

/// The start/end pair of a subtitle cue.
///
/// Cue-based units carry a span; sentence units carry none. Wrapping the pair
/// in one type keeps the two timestamps from ever being present separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSpan {
    /// When the cue appears.
    pub start: CueTime,
    /// When the cue disappears.
    pub end: CueTime,
}

impl TimeSpan {
    /// Create a new time span.
    pub fn new(start: CueTime, end: CueTime) -> Self {
        TimeSpan { start, end }
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.start, self.end)
    }
}

/// One analyzable span of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Unit {
    /// Identifier of the originating document, normally its filename.
    pub source_id: String,

    /// The text span to tokenize. Non-empty after trimming; the loader
    /// discards empty spans before they enter the pipeline.
    pub content: String,

    /// Cue timing, present only for cue-based sources.
    pub time: Option<TimeSpan>,
}

impl Unit {
    /// Create a unit for a segmented sentence (no timing metadata).
    pub fn sentence<S: Into<String>, C: Into<String>>(source_id: S, content: C) -> Self {
        Unit {
            source_id: source_id.into(),
            content: content.into(),
            time: None,
        }
    }

    /// Create a unit for a subtitle cue.
    pub fn cue<S: Into<String>, C: Into<String>>(source_id: S, content: C, time: TimeSpan) -> Self {
        Unit {
            source_id: source_id.into(),
            content: content.into(),
            time: Some(time),
        }
    }
}
