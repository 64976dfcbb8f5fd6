//! Filesystem module.
//!
//! Provides:
//! - Discovery of topic lookup files
//! - Selection of signature source files

pub mod paths;

pub use paths::{absolute, discover_lookup_files, file_name, resolve_inputs, select_other_files};
