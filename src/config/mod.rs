//! Configuration module for topic-dedup.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Default names for the topic directory, base file, and output prefix
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, LOOKUP_SUFFIX};
pub use validation::{validate_config, validate_file_name};
