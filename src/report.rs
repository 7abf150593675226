//! Console output formatting.
//!
//! Kept separate from the engine so styling lives in one place and tests
//! can capture output through any writer. Colors are disabled automatically
//! when `NO_COLOR` is set or stdout is not a terminal.

use std::io::Write;

use colored::Colorize;

use crate::engine::Report;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prints one report line, prefixed with the search directory it came from.
pub fn print_report<W: Write>(report: &Report, fatal: bool, writer: &mut W) {
    let line = if fatal {
        format!(
            "{}: {} {}",
            report.dir.cyan(),
            FAILURE_MARK.red(),
            report.text.red()
        )
    } else {
        format!("{}: {}", report.dir.cyan(), report.text)
    };
    let _ = writeln!(writer, "{line}");
}

/// Prints a final success notice.
pub fn print_notice<W: Write>(text: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), text);
}

/// Prints an error line.
pub fn print_error<W: Write>(text: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".red().bold(), text);
}
