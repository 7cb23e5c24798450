//! Cleanup of rendered manual-page text before parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Strips terminal formatting from rendered man output.
///
/// Removes ANSI escape sequences and backspace overstrikes (`X\bX` for bold,
/// `_\bX` for underline), and folds `\r\n` / `\r` line endings into `\n`.
/// Indentation and blank lines are preserved since block boundaries depend
/// on them.
pub fn normalize_page(raw: &str) -> String {
    static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("static regex must compile")
    });
    static OVERSTRIKE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r".\x08").expect("static regex must compile"));

    let stripped = ANSI_RE.replace_all(raw, "");
    let mut cleaned = stripped.into_owned();
    while OVERSTRIKE_RE.is_match(&cleaned) {
        cleaned = OVERSTRIKE_RE.replace_all(&cleaned, "").into_owned();
    }
    cleaned.replace("\r\n", "\n").replace('\r', "\n")
}
