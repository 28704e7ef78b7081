//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GoiArgs, OutputFormat};
use crate::error::Result;
use crate::vocabulary::extractor::ExtractionResult;
use crate::vocabulary::occurrences::WordOccurrences;
use crate::vocabulary::report::VocabularyEntry;

/// Result structure for the vocabulary command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyOutput {
    pub entries: Vec<VocabularyEntry>,
    pub known_word_count: usize,
    pub new_word_count: usize,
    pub warnings: Vec<String>,
}

impl VocabularyOutput {
    /// Build the output view, truncating the ranking when a limit is set.
    pub fn from_result(result: &ExtractionResult, limit: Option<usize>) -> Self {
        let mut entries = result.report.entries.clone();
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        VocabularyOutput {
            entries,
            known_word_count: result.report.known_word_count,
            new_word_count: result.report.new_word_count,
            warnings: result.warnings.clone(),
        }
    }
}

/// One occurrence span in the occurrences command output.
#[derive(Debug, Serialize, Deserialize)]
pub struct OccurrenceSpanOutput {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One source-file group in the occurrences command output.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceOccurrencesOutput {
    pub source_id: String,
    pub spans: Vec<OccurrenceSpanOutput>,
}

/// Result structure for the occurrences command.
#[derive(Debug, Serialize, Deserialize)]
pub struct OccurrencesOutput {
    pub form: String,
    pub total_spans: usize,
    pub sources: Vec<SourceOccurrencesOutput>,
    pub warnings: Vec<String>,
}

impl OccurrencesOutput {
    /// Build the output view of a grouped occurrence lookup.
    pub fn from_occurrences(occurrences: &WordOccurrences, warnings: &[String]) -> Self {
        let sources = occurrences
            .sources
            .iter()
            .map(|group| SourceOccurrencesOutput {
                source_id: group.source_id.clone(),
                spans: group
                    .spans
                    .iter()
                    .map(|unit| OccurrenceSpanOutput {
                        content: unit.content.clone(),
                        start: unit.time.map(|span| span.start.to_string()),
                        end: unit.time.map(|span| span.end.to_string()),
                    })
                    .collect(),
            })
            .collect();

        OccurrencesOutput {
            form: occurrences.form.clone(),
            total_spans: occurrences.total_spans(),
            sources,
            warnings: warnings.to_vec(),
        }
    }
}

/// Print the vocabulary report in the selected format.
pub fn print_vocabulary(output: &VocabularyOutput, args: &GoiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(output, args),
        OutputFormat::Human => {
            println!(
                "Vocabulary: {} new words ({} known words supplied)",
                output.new_word_count, output.known_word_count
            );
            println!("═══════════════════════════════════");

            for entry in &output.entries {
                println!("{:>6}  {}", entry.count, entry.form);
            }

            print_warnings_human(&output.warnings);
            Ok(())
        }
    }
}

/// Print the occurrence listing in the selected format.
pub fn print_occurrences(output: &OccurrencesOutput, args: &GoiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(output, args),
        OutputFormat::Human => {
            println!("Occurrences of {}: {} spans", output.form, output.total_spans);
            println!("═══════════════════════════════════");

            for group in &output.sources {
                println!();
                println!("{}:", group.source_id);
                for span in &group.spans {
                    match (&span.start, &span.end) {
                        (Some(start), Some(end)) => {
                            println!("  [{start} --> {end}] {}", span.content)
                        }
                        _ => println!("  {}", span.content),
                    }
                }
            }

            print_warnings_human(&output.warnings);
            Ok(())
        }
    }
}

fn print_warnings_human(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("Warnings:");
    for warning in warnings {
        println!("  {warning}");
    }
}

fn print_json<T: Serialize>(value: &T, args: &GoiArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
