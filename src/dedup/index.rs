//! Signature index built from the other subjects' documents.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::dedup::signature::Signature;
use crate::error::{Error, Result};
use crate::fs::file_name;
use crate::lookup::{load_document, TopicLookupDocument};
use crate::output::print_warning;

/// Set of signatures collected from every source document.
#[derive(Debug, Default)]
pub struct SignatureIndex {
    signatures: HashSet<Signature>,

    // Statistics
    entries_seen: u64,
    files_scanned: u64,
    skipped_files: Vec<PathBuf>,
}

impl SignatureIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a list of source files.
    ///
    /// A file that cannot be read or parsed is reported and skipped.
    pub fn collect(paths: &[PathBuf], progress: &ProgressBar) -> Self {
        let mut index = Self::new();

        for path in paths {
            let name = file_name(path).unwrap_or_default();
            progress.set_message(name.to_string());

            if let Err(e) = index.add_file(path) {
                progress.suspend(|| {
                    print_warning(&format!("Skipping {}: {}", name, skip_reason(&e)))
                });
                index.skipped_files.push(path.clone());
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        index
    }

    /// Load a single file and add its signatures.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let document = load_document(path)?;
        let before = self.entries_seen;

        self.add_document(&document);
        self.files_scanned += 1;

        tracing::debug!(
            "Indexed {} entries from {}",
            self.entries_seen - before,
            path.display()
        );
        Ok(())
    }

    /// Add every complete signature found in a document.
    pub fn add_document(&mut self, document: &TopicLookupDocument) {
        for codes in document.skill_codes() {
            if let Some(signature) =
                Signature::from_codes(codes.unit_cd, codes.topic_cd, codes.skill_cd)
            {
                self.signatures.insert(signature);
                self.entries_seen += 1;
            }
        }
    }

    /// Check if a signature was seen in any source document.
    pub fn contains(&self, signature: &Signature) -> bool {
        self.signatures.contains(signature)
    }

    /// Total qualifying entries seen, counting repeats.
    pub fn entries_seen(&self) -> u64 {
        self.entries_seen
    }

    /// Number of distinct signatures.
    pub fn unique_count(&self) -> usize {
        self.signatures.len()
    }

    /// Number of files successfully indexed.
    pub fn files_scanned(&self) -> u64 {
        self.files_scanned
    }

    /// Files that were skipped because they could not be parsed.
    pub fn skipped_files(&self) -> &[PathBuf] {
        &self.skipped_files
    }
}

/// Why a source file was skipped, without repeating its path.
fn skip_reason(error: &Error) -> String {
    match error {
        Error::Parse { source, .. } => format!("failed to parse JSON ({})", source),
        Error::Io(e) => format!("failed to read file ({})", e),
        other => other.to_string(),
    }
}
