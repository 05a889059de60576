//! Output formatting utilities

use console::style;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Style a path for display
pub fn path(path: &std::path::Path) -> String {
    style(path.display()).cyan().to_string()
}
