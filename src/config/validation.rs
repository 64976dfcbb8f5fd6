//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_file_name("base_filename", &config.base_filename)?;
    validate_file_name("output_prefix", &config.output_prefix)?;

    if config.base_filename.starts_with(&config.output_prefix) {
        return Err(Error::ConfigValidation {
            field: "output_prefix".to_string(),
            message: format!(
                "Base file '{}' starts with the output prefix '{}' and would be excluded from its own run",
                config.base_filename, config.output_prefix
            ),
        });
    }

    if config.topic_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "topic_dir".to_string(),
            message: "Directory cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate a single file name component (or filename prefix).
///
/// Rejects empty values and anything that could escape the topic directory.
pub fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    if name.contains("..") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Path traversal detected: '{}'", name),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Path separators not allowed: '{}'", name),
        });
    }

    if name.contains('\0') {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Null bytes not allowed: '{}'", name),
        });
    }

    Ok(())
}
