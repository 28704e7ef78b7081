//! Document loading, segmentation, and the unit model.

pub mod loader;
pub mod segmenter;
pub mod subtitle;
pub mod unit;

// Re-export commonly used types
pub use loader::{DocumentLoader, LoadedBatch, SourceFile, SourceKind};
pub use segmenter::SentenceSegmenter;
pub use subtitle::Cue;
pub use unit::{CueTime, TimeSpan, Unit};
