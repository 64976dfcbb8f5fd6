//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename suffix shared by every topic lookup document.
pub const LOOKUP_SUFFIX: &str = "TopicLookup.json";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the `*TopicLookup.json` files.
    #[serde(default = "default_topic_dir")]
    pub topic_dir: PathBuf,

    /// Name of the document being deduplicated.
    #[serde(default = "default_base_filename")]
    pub base_filename: String,

    /// Prefix prepended to the base filename for the output file.
    /// Files carrying it are never read as signature sources.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Whether to draw a progress bar while scanning other files.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic_dir: default_topic_dir(),
            base_filename: default_base_filename(),
            output_prefix: default_output_prefix(),
            show_progress: true,
        }
    }
}

fn default_topic_dir() -> PathBuf {
    PathBuf::from("topicLookups")
}

fn default_base_filename() -> String {
    "Physics_C_Electricity_and_Magnetism_TopicLookup.json".to_string()
}

fn default_output_prefix() -> String {
    "NEW_".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Name of the filtered output file.
    pub fn output_filename(&self) -> String {
        format!("{}{}", self.output_prefix, self.base_filename)
    }

    /// Full path of the base document.
    pub fn base_path(&self) -> PathBuf {
        self.topic_dir.join(&self.base_filename)
    }

    /// Full path of the filtered output document.
    pub fn output_path(&self) -> PathBuf {
        self.topic_dir.join(self.output_filename())
    }
}
