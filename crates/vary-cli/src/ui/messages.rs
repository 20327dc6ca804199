//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Info,
    Warning,
    Error,
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{}", status_line(Status::Success, message, colors_enabled()));
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{}", status_line(Status::Info, message, colors_enabled()));
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{}", status_line(Status::Warning, message, colors_enabled()));
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{}", status_line(Status::Error, message, colors_enabled()));
}

fn status_line(status: Status, message: &str, colors: bool) -> String {
    let symbol = match status {
        Status::Success => "✓",
        Status::Info => "ℹ",
        Status::Warning => "⚠",
        Status::Error => "✗",
    };

    if !colors {
        return format!("{} {}", symbol, message);
    }

    match status {
        Status::Success => format!("{} {}", symbol.green().bold(), message),
        Status::Info => format!("{} {}", symbol.blue().bold(), message),
        Status::Warning => format!("{} {}", symbol.yellow().bold(), message.yellow()),
        Status::Error => format!("{} {}", symbol.red().bold(), message.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_have_symbol_and_message() {
        assert_eq!(
            status_line(Status::Success, "Wrote build/variants/mock.json", false),
            "✓ Wrote build/variants/mock.json"
        );
        assert_eq!(
            status_line(Status::Info, "Checking variants...", false),
            "ℹ Checking variants..."
        );
        assert_eq!(
            status_line(Status::Warning, "No assets", false),
            "⚠ No assets"
        );
        assert_eq!(
            status_line(Status::Error, "Entry module not found", false),
            "✗ Entry module not found"
        );
    }

    #[test]
    fn colored_lines_keep_the_message() {
        let line = status_line(Status::Error, "Entry module not found", true);
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("Entry module not found"));
        assert_ne!(line, status_line(Status::Error, "Entry module not found", false));
    }
}
