//! The deduplication run: discover, aggregate, filter, write.

use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::dedup::{filter_document, FilterStats, SignatureIndex};
use crate::error::Result;
use crate::fs::{absolute, file_name, resolve_inputs, select_other_files};
use crate::lookup::{load_document, write_document};
use crate::output::{create_item_bar, print_info, print_list_item};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Resolved path of the written output file.
    pub output_path: PathBuf,
    /// Files used as signature sources, including skipped ones.
    pub other_files: Vec<PathBuf>,
    /// Source files that could not be parsed.
    pub skipped_files: Vec<PathBuf>,
    /// Qualifying entries seen across sources, counting repeats.
    pub entries_seen: u64,
    /// Distinct signatures across sources.
    pub unique_signatures: usize,
    pub stats: FilterStats,
}

/// Run the whole deduplication against `config`.
///
/// The output file is only written once the base document has been
/// filtered in memory; any earlier failure leaves the directory untouched.
pub fn run_deduplication(config: &Config) -> Result<RunReport> {
    let files = resolve_inputs(config)?;
    print_info(&format!(
        "Found {} TopicLookup files in {}",
        files.len(),
        absolute(&config.topic_dir).display()
    ));

    let other_files = select_other_files(&files, config);
    print_info(&format!(
        "Using {} non-base files for deduping:",
        other_files.len()
    ));
    for path in &other_files {
        print_list_item(file_name(path).unwrap_or_default());
    }

    let progress = if config.show_progress {
        create_item_bar(other_files.len() as u64, "Indexing")
    } else {
        ProgressBar::hidden()
    };
    let index = SignatureIndex::collect(&other_files, &progress);
    print_info(&format!(
        "Collected {} (unitCd, topicCd, skillCd) entries from other subjects ({} unique signatures).",
        index.entries_seen(),
        index.unique_count()
    ));

    let base_path = config.base_path();
    tracing::info!("Filtering {}", base_path.display());
    let base = load_document(&base_path)?;
    let (filtered, stats) = filter_document(base, &index);

    let output_path = config.output_path();
    write_document(&output_path, &filtered)?;
    tracing::info!(
        "Removed {} skills, wrote {}",
        stats.removed_skills,
        output_path.display()
    );

    Ok(RunReport {
        output_path: absolute(&output_path),
        other_files,
        skipped_files: index.skipped_files().to_vec(),
        entries_seen: index.entries_seen(),
        unique_signatures: index.unique_count(),
        stats,
    })
}
