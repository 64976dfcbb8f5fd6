//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for item counts.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(&format!(
        "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {{msg}}",
        message
    )) {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
