//! Topic Dedup - remove topic lookup skills already covered by other subjects
//!
//! This library reads a directory of `*TopicLookup.json` documents, collects
//! the `(unitCd, topicCd, skillCd)` signatures of every subject except a base
//! document, and writes a copy of the base document without those skills.
//!
//! # Features
//!
//! - Discovery of topic lookup files by name suffix
//! - Signature aggregation tolerant of malformed source files
//! - Order- and field-preserving filtering of units, topics, and skills
//! - Prior outputs are never used as signature sources
//!
//! # Example
//!
//! ```no_run
//! use topic_dedup::{run_deduplication, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let report = run_deduplication(&config)?;
//!     println!("removed {} skills", report.stats.removed_skills);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod fs;
pub mod lookup;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use config::Config;
pub use dedup::{filter_document, FilterStats, Signature, SignatureIndex};
pub use error::{Error, Result};
pub use lookup::{Skill, Topic, TopicLookupDocument, Unit};
pub use pipeline::{run_deduplication, RunReport};
