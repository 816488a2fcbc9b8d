//! Operator-facing console output.

use std::fmt::Display;

const RULE_WIDTH: usize = 48;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print an aligned key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("  {label:<22} {value}");
}

/// Print a success line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}
