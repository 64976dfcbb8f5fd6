//! Reading and writing topic lookup documents.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::lookup::types::TopicLookupDocument;

/// Read and parse a topic lookup document.
///
/// The file is read in full and closed before parsing.
pub fn load_document(path: &Path) -> Result<TopicLookupDocument> {
    let content = fs::read_to_string(path)?;

    serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document as 2-space indented UTF-8 JSON, replacing any existing file.
///
/// Non-ASCII characters are written as-is rather than escaped.
pub fn write_document(path: &Path, document: &TopicLookupDocument) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
