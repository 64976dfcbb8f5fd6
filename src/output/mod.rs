//! Output module for console output and progress.
//!
//! Provides:
//! - Prefixed console messages
//! - Progress bars
//! - Summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_error, print_info, print_list_item, print_warning};
pub use progress::create_item_bar;
pub use stats::print_summary;
