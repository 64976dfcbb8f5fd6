//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Topic lookup deduplication CLI.
#[derive(Parser, Debug)]
#[command(
    name = "topic-dedup",
    version,
    about = "Remove topic lookup skills that already appear in other subjects",
    long_about = "Reads every *TopicLookup.json file in a directory, collects the \
                  (unitCd, topicCd, skillCd) entries of all subjects except the base file, \
                  and writes a copy of the base file without those entries.\n\n\
                  With no arguments the built-in directory and file names are used."
)]
pub struct Args {
    /// Directory containing the *TopicLookup.json files.
    #[arg(short = 'd', long = "dir", env = "TOPIC_DEDUP_DIR")]
    pub topic_dir: Option<PathBuf>,

    /// File name of the base document to deduplicate.
    #[arg(short, long = "base")]
    pub base_filename: Option<String>,

    /// Prefix for the output file; files with this prefix are never used as sources.
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "topic-dedup.toml")]
    pub config: PathBuf,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.topic_dir {
            config.topic_dir = dir;
        }

        if let Some(base) = self.base_filename {
            config.base_filename = base;
        }

        if let Some(prefix) = self.output_prefix {
            config.output_prefix = prefix;
        }

        // Only override if set to non-default
        if self.quiet {
            config.show_progress = false;
        }
    }
}
