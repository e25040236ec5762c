//! Terminal logging with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("load"; "{} pages from {}", count, root.display());
//! log!("warn"; "`Ship` extends unknown type `Vehicle`");
//! ```
//!
//! Output is suppressed with [`set_quiet`], which library callers and
//! tests use to keep the pipeline silent.

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// When set, `log` writes nothing.
static QUIET: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Layout Constants
// ============================================================================
//
// Line format: "[module] message"
//               ^------^
//               prefix

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for `[`, `]`, and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Public API
// ============================================================================

/// Silence (or re-enable) all log output.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether log output is currently suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Log a message with a colored module prefix.
///
/// Automatically truncates long single-line messages to fit terminal width.
#[inline]
pub fn log(module: &str, message: &str) {
    emit(module, message, true);
}

/// Log a message without truncation, for lines whose tail matters
/// (warnings naming routes and types).
#[inline]
pub fn log_full(module: &str, message: &str) {
    emit(module, message, false);
}

fn emit(module: &str, message: &str, truncate: bool) {
    if is_quiet() {
        return;
    }

    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width() as usize;
    let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {}", fit_message(message, max_msg_len, truncate)).ok();
    stdout.flush().ok();
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "build" => prefix.bright_blue().bold(),
        "check" => prefix.bright_green().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Message as printed: multiline messages (decode errors) are kept whole,
/// single lines are cut to `max_len` when `truncate` is set.
#[inline]
fn fit_message(message: &str, max_len: usize, truncate: bool) -> &str {
    if truncate && !message.contains('\n') {
        truncate_str(message, max_len)
    } else {
        message
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len_typical_module() {
        // "resolve" -> "[resolve] " = 7 + 2 + 1 = 10
        assert_eq!(calc_prefix_len(7), 10);
    }

    #[test]
    fn test_calc_prefix_len_empty() {
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "€" is 3 bytes, cutting at 4 falls back to 3
        assert_eq!(truncate_str("€€", 4), "€");
    }

    #[test]
    fn test_truncate_str_zero_limit() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_fit_message_truncates_single_line() {
        assert_eq!(fit_message("`Ship` extends unknown type", 6, true), "`Ship`");
    }

    #[test]
    fn test_fit_message_keeps_full_line() {
        let warning = "`/ship` extends unknown type `Vehicle`";
        assert_eq!(fit_message(warning, 6, false), warning);
    }

    #[test]
    fn test_fit_message_keeps_multiline() {
        assert_eq!(fit_message("line one\nline two", 4, true), "line one\nline two");
    }

    #[test]
    fn test_colorize_prefix_wraps_module_in_brackets() {
        let prefix = colorize_prefix("warn", "warn");
        assert!(prefix.to_string().contains("[warn]"));
    }
}
