//! Topic lookup file discovery.

use std::path::{Path, PathBuf};

use crate::config::{Config, LOOKUP_SUFFIX};
use crate::error::{Error, Result};

/// Find every `*TopicLookup.json` file directly inside `dir`, sorted by name.
pub fn discover_lookup_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if file_name(&path).is_some_and(|name| name.ends_with(LOOKUP_SUFFIX)) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Keep only the files that act as signature sources.
///
/// The base file and anything written by a previous run are excluded.
pub fn select_other_files(files: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|path| match file_name(path) {
            Some(name) => name != config.base_filename && !name.starts_with(&config.output_prefix),
            None => false,
        })
        .cloned()
        .collect()
}

/// Check the inputs exist and return the discovered lookup files.
///
/// Fails if the base file is missing or the directory holds no lookup files.
pub fn resolve_inputs(config: &Config) -> Result<Vec<PathBuf>> {
    let base_path = config.base_path();
    if !base_path.exists() {
        return Err(Error::MissingBaseFile(absolute(&base_path)));
    }

    let files = discover_lookup_files(&config.topic_dir)?;
    if files.is_empty() {
        return Err(Error::NoLookupFiles(absolute(&config.topic_dir)));
    }

    Ok(files)
}

/// Best-effort absolute form of a path for messages.
pub fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// The UTF-8 file name of a path, if any.
pub fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}
