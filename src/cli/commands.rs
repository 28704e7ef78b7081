//! Command implementations for the goi CLI.

use std::fs;
use std::sync::Arc;

use crate::analysis::tokenizer::LinderaTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::loader::SourceFile;
use crate::error::Result;
use crate::vocabulary::extractor::{ExtractionResult, VocabularyExtractor};
use crate::vocabulary::known_words::KnownWordSet;

/// Execute a CLI command.
pub fn execute_command(args: GoiArgs) -> Result<()> {
    match &args.command {
        Command::Vocabulary(vocab_args) => run_vocabulary(vocab_args.clone(), &args),
        Command::Occurrences(occ_args) => run_occurrences(occ_args.clone(), &args),
    }
}

/// Build the ranked vocabulary report.
fn run_vocabulary(args: VocabularyArgs, cli_args: &GoiArgs) -> Result<()> {
    let result = run_extraction(&args.source, cli_args)?;
    let output = VocabularyOutput::from_result(&result, args.limit);

    print_vocabulary(&output, cli_args)
}

/// Show the deduplicated occurrences of one word.
fn run_occurrences(args: OccurrencesArgs, cli_args: &GoiArgs) -> Result<()> {
    let result = run_extraction(&args.source, cli_args)?;
    let occurrences = result.occurrences(&args.word);
    let output = OccurrencesOutput::from_occurrences(&occurrences, &result.warnings);

    print_occurrences(&output, cli_args)
}

/// Read the sources, build the analyzer, and run the pipeline once.
fn run_extraction(source: &SourceArgs, cli_args: &GoiArgs) -> Result<ExtractionResult> {
    let files = source
        .files
        .iter()
        .map(SourceFile::from_path)
        .collect::<Result<Vec<_>>>()?;

    let known_words = match &source.known_words {
        Some(path) => KnownWordSet::from_json_bytes(&fs::read(path)?),
        None => KnownWordSet::new(),
    };
    if cli_args.verbosity() > 1 {
        println!("Loaded {} known words", known_words.len());
    }

    let tokenizer = LinderaTokenizer::new(
        &source.mode,
        &source.dictionary,
        source.user_dictionary.as_deref(),
    )?;
    let extractor = VocabularyExtractor::new(Arc::new(tokenizer));

    extractor.extract(&files, &known_words, &source.extract_options())
}
