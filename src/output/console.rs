//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("[info]").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("[warn]").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[error]").red().bold(), message);
}

/// Print an indented list entry under a previous message.
pub fn print_list_item(item: &str) {
    println!("       - {}", item);
}
