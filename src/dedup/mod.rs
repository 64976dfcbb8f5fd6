//! Deduplication module.
//!
//! Provides:
//! - Skill signatures
//! - Signature index built from other subjects
//! - Filtering of the base document

pub mod filter;
pub mod index;
pub mod signature;

pub use filter::{filter_document, FilterStats};
pub use index::SignatureIndex;
pub use signature::Signature;
