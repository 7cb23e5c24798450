//! Shared type definitions for flag lookup.
//!
//! The types here are produced by the flag normalizer and consumed by the
//! block extractor in `manly-extract`. Everything lives for a single
//! invocation; nothing is persisted.

use std::fmt;

use serde::Serialize;

/// A flag in canonical form, ready to be matched against manual-page headlines.
///
/// Either a single-dash flag (`-l`, or `-nostdinc` for programs that use
/// single-dash long names) or a double-dash long flag (`--all`). Any `=value`
/// suffix has already been stripped.
///
/// # Examples
///
/// ```
/// use manly_core::NormalizedFlag;
///
/// let flag = NormalizedFlag::new("--force");
/// assert_eq!(flag.as_str(), "--force");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedFlag(String);

impl NormalizedFlag {
    /// Wraps an already-normalized flag string.
    pub fn new(flag: impl Into<String>) -> Self {
        Self(flag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How single-dash tokens with more than one character are interpreted.
///
/// # Examples
///
/// ```
/// use manly_core::DashStyle;
///
/// assert_eq!(DashStyle::default(), DashStyle::Clustered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashStyle {
    /// Shell-style clustering: `-la` means `-l -a` (the default).
    #[default]
    Clustered,
    /// Single-dash long names: `-nostdinc` is searched whole, then letter by
    /// letter.
    LongNames,
}

/// Terminal emphasis applied to matched flag tokens and the page title.
///
/// Computed once at process start (from whether stdout is a terminal and
/// the user's color choice) and passed explicitly into rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Plain text, no escape sequences.
    #[default]
    Plain,
    /// ANSI bold.
    Bold,
}

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

impl Emphasis {
    /// Wraps `text` in this emphasis.
    ///
    /// ```
    /// use manly_core::Emphasis;
    ///
    /// assert_eq!(Emphasis::Plain.apply("-a"), "-a");
    /// assert_eq!(Emphasis::Bold.apply("-a"), "\x1b[1m-a\x1b[0m");
    /// ```
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Bold => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Self::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_flag_serializes_as_plain_string() {
        let json = serde_json::to_string(&NormalizedFlag::new("-a")).unwrap();
        assert_eq!(json, "\"-a\"");
    }

    #[test]
    fn test_emphasis_plain_is_identity() {
        assert_eq!(Emphasis::Plain.apply("ls - list"), "ls - list");
        assert!(!Emphasis::Plain.is_enabled());
        assert!(Emphasis::Bold.is_enabled());
    }
}
