//! Command line argument parsing for the goi CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::vocabulary::extractor::ExtractOptions;

/// goi - Japanese vocabulary extraction from subtitles and text
#[derive(Parser, Debug, Clone)]
#[command(name = "goi")]
#[command(about = "Japanese vocabulary extraction and frequency analysis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GoiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GoiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the frequency-ranked vocabulary report
    Vocabulary(VocabularyArgs),

    /// Show the deduplicated occurrences of one word
    Occurrences(OccurrencesArgs),
}

/// Source files and pipeline options shared by every command.
#[derive(Parser, Debug, Clone)]
pub struct SourceArgs {
    /// Subtitle (.srt) and plain-text (.txt) source files
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Known-words JSON file; matching vocabulary is suppressed
    #[arg(short = 'k', long, value_name = "JSON_FILE")]
    pub known_words: Option<PathBuf>,

    /// Strip parenthetical asides before analysis
    #[arg(long)]
    pub ignore_parentheticals: bool,

    /// Drop tokens containing non-word, non-Japanese characters
    #[arg(long)]
    pub filter_nonwords: bool,

    /// Drop purely numeric or romanized tokens
    #[arg(long)]
    pub filter_numeric_or_romanized: bool,

    /// Dictionary URI for the morphological analyzer
    #[arg(long, value_name = "URI", default_value = "embedded://ipadic")]
    pub dictionary: String,

    /// Optional user dictionary URI
    #[arg(long, value_name = "URI")]
    pub user_dictionary: Option<String>,

    /// Analyzer segmentation mode
    #[arg(long, default_value = "normal")]
    pub mode: String,
}

impl SourceArgs {
    /// Map the CLI flags onto pipeline options.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            ignore_parentheticals: self.ignore_parentheticals,
            filter_nonwords: self.filter_nonwords,
            filter_numeric_or_romanized: self.filter_numeric_or_romanized,
        }
    }
}

/// Arguments for the vocabulary report
#[derive(Parser, Debug, Clone)]
pub struct VocabularyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show only the top N entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the per-word occurrence listing
#[derive(Parser, Debug, Clone)]
pub struct OccurrencesArgs {
    /// The canonical form to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_vocabulary_command() {
        let args = GoiArgs::try_parse_from([
            "goi",
            "vocabulary",
            "ep1.srt",
            "story.txt",
            "--filter-nonwords",
            "--limit",
            "20",
        ])
        .unwrap();

        if let Command::Vocabulary(vocab_args) = args.command {
            assert_eq!(vocab_args.source.files.len(), 2);
            assert!(vocab_args.source.filter_nonwords);
            assert!(!vocab_args.source.filter_numeric_or_romanized);
            assert_eq!(vocab_args.limit, Some(20));
        } else {
            panic!("Expected Vocabulary command");
        }
    }

    #[test]
    fn test_occurrences_command() {
        let args = GoiArgs::try_parse_from([
            "goi",
            "occurrences",
            "好き",
            "ep1.srt",
            "--known-words",
            "known.json",
            "--ignore-parentheticals",
        ])
        .unwrap();

        if let Command::Occurrences(occ_args) = args.command {
            assert_eq!(occ_args.word, "好き");
            assert_eq!(occ_args.source.files, vec![PathBuf::from("ep1.srt")]);
            assert_eq!(occ_args.source.known_words, Some(PathBuf::from("known.json")));
            assert!(occ_args.source.ignore_parentheticals);
        } else {
            panic!("Expected Occurrences command");
        }
    }

    #[test]
    fn test_files_are_required() {
        assert!(GoiArgs::try_parse_from(["goi", "vocabulary"]).is_err());
        assert!(GoiArgs::try_parse_from(["goi", "occurrences", "好き"]).is_err());
    }

    #[test]
    fn test_analyzer_defaults() {
        let args = GoiArgs::try_parse_from(["goi", "vocabulary", "a.txt"]).unwrap();

        if let Command::Vocabulary(vocab_args) = args.command {
            assert_eq!(vocab_args.source.dictionary, "embedded://ipadic");
            assert_eq!(vocab_args.source.mode, "normal");
            assert!(vocab_args.source.user_dictionary.is_none());
        } else {
            panic!("Expected Vocabulary command");
        }
    }

    #[test]
    fn test_extract_options_mapping() {
        let args = GoiArgs::try_parse_from([
            "goi",
            "vocabulary",
            "a.txt",
            "--filter-numeric-or-romanized",
        ])
        .unwrap();

        if let Command::Vocabulary(vocab_args) = args.command {
            let options = vocab_args.source.extract_options();
            assert!(options.filter_numeric_or_romanized);
            assert!(!options.ignore_parentheticals);
            assert!(!options.filter_nonwords);
        } else {
            panic!("Expected Vocabulary command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = GoiArgs::try_parse_from(["goi", "vocabulary", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = GoiArgs::try_parse_from(["goi", "-vv", "vocabulary", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = GoiArgs::try_parse_from(["goi", "--quiet", "vocabulary", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            GoiArgs::try_parse_from(["goi", "--format", "json", "vocabulary", "a.txt"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
