//! Topic lookup document model.
//!
//! Provides:
//! - Typed units, topics, and skills with pass-through extra fields
//! - Loading and writing documents

pub mod io;
pub mod types;

pub use io::{load_document, write_document};
pub use types::{LookupData, Skill, SkillCodes, Topic, TopicLookupDocument, Unit};
