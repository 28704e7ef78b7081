//! Document loading and dispatch.
//!
//! The loader takes uploaded `(filename, bytes)` pairs, decodes them lossily,
//! optionally strips parenthetical asides, and turns each recognized file
//! into ordered [`Unit`]s: subtitle files through the cue parser, text files
//! through the sentence segmenter. Unrecognized kinds are ignored, and a
//! subtitle file with malformed cue syntax is skipped whole with a warning —
//! neither aborts the batch.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::analysis::char_filter::{CharFilter, ParenthesesCharFilter};
use crate::document::segmenter::SentenceSegmenter;
use crate::document::subtitle;
use crate::document::unit::Unit;
use crate::error::{GoiError, Result};

/// One uploaded source file: a name and its raw bytes.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Filename, used as the unit source identifier.
    pub name: String,
    /// Raw, undecoded content.
    pub bytes: Vec<u8>,
}

/// Structural kind of a source file, dispatched on its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Cue-based subtitle transcript (`.srt`).
    Subtitle,
    /// Continuous prose segmented on sentence markers (`.txt`).
    Text,
    /// Anything else; contributes no units.
    Unsupported,
}

impl SourceFile {
    /// Create a source file from a name and raw bytes.
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        SourceFile {
            name: name.into(),
            bytes,
        }
    }

    /// Read a source file from disk, using the file name as its identifier.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .ok_or_else(|| {
                GoiError::invalid_argument(format!("not a file path: {}", path.display()))
            })?
            .to_string_lossy()
            .into_owned();
        let bytes = fs::read(path)?;

        Ok(SourceFile { name, bytes })
    }

    /// The structural kind this file dispatches to.
    pub fn kind(&self) -> SourceKind {
        match Path::new(&self.name).extension() {
            Some(ext) if ext.eq_ignore_ascii_case("srt") => SourceKind::Subtitle,
            Some(ext) if ext.eq_ignore_ascii_case("txt") => SourceKind::Text,
            _ => SourceKind::Unsupported,
        }
    }
}

/// The outcome of loading a batch of source files.
#[derive(Debug, Default)]
pub struct LoadedBatch {
    /// Units across all files in upload order, source order preserved.
    pub units: Vec<Unit>,
    /// How many files had a recognized kind.
    pub recognized_files: usize,
    /// Per-file skip reasons (malformed cue syntax).
    pub warnings: Vec<String>,
}

/// Decodes, strips, and dispatches uploaded files into units.
pub struct DocumentLoader {
    parentheses: Option<ParenthesesCharFilter>,
    segmenter: SentenceSegmenter,
}

impl DocumentLoader {
    /// Create a loader. When `ignore_parentheticals` is set, parenthesized
    /// spans are removed from each decoded file before parsing.
    pub fn new(ignore_parentheticals: bool) -> Self {
        DocumentLoader {
            parentheses: ignore_parentheticals.then(ParenthesesCharFilter::new),
            segmenter: SentenceSegmenter::new(),
        }
    }

    /// Load a batch of files into units.
    pub fn load(&self, files: &[SourceFile]) -> LoadedBatch {
        let mut batch = LoadedBatch::default();

        for file in files {
            match file.kind() {
                SourceKind::Subtitle => {
                    batch.recognized_files += 1;
                    self.load_subtitle(file, &mut batch);
                }
                SourceKind::Text => {
                    batch.recognized_files += 1;
                    self.load_text(file, &mut batch);
                }
                SourceKind::Unsupported => {
                    debug!("ignoring unsupported file kind: {}", file.name);
                }
            }
        }

        batch
    }

    fn load_subtitle(&self, file: &SourceFile, batch: &mut LoadedBatch) {
        let text = self.decode(file);
        let cues = match subtitle::parse(&text) {
            Ok(cues) => cues,
            Err(e) => {
                warn!("skipping subtitle file {}: {}", file.name, e);
                batch.warnings.push(format!("{}: {}", file.name, e));
                return;
            }
        };

        let before = batch.units.len();
        for cue in cues {
            let content = cue.text.trim();
            if content.is_empty() {
                continue;
            }
            batch
                .units
                .push(Unit::cue(file.name.clone(), content, cue.span));
        }
        debug!("{}: {} cue units", file.name, batch.units.len() - before);
    }

    fn load_text(&self, file: &SourceFile, batch: &mut LoadedBatch) {
        let text = self.decode(file);

        let before = batch.units.len();
        for sentence in self.segmenter.segment(&text) {
            batch.units.push(Unit::sentence(file.name.clone(), sentence));
        }
        debug!("{}: {} sentence units", file.name, batch.units.len() - before);
    }

    /// Lossy decode plus the optional parenthetical strip. Invalid byte
    /// sequences are replaced, never fatal.
    fn decode(&self, file: &SourceFile) -> String {
        let text = String::from_utf8_lossy(&file.bytes);
        match &self.parentheses {
            Some(filter) => filter.filter(&text),
            None => text.into_owned(),
        }
    }
}
