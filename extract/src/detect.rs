//! Detection of the single-dash long name convention.

use manly_core::DashStyle;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Returns `true` when the page documents single-dash long names.
///
/// The signal is an indented line that begins with one dash followed by at
/// least two word characters, as in `       -nostdinc` or `       -maxdepth
/// levels`. Lines starting with `--` do not count.
pub fn uses_single_dash_long_names(page: &str) -> bool {
    static SINGLE_DASH_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?m)^[ \t]+-[A-Za-z0-9_]{2,}").expect("static regex must compile")
    });

    SINGLE_DASH_WORD_RE.is_match(page)
}

/// Picks the dash style for this page.
///
/// An explicit style wins; otherwise the page is inspected with
/// [`uses_single_dash_long_names`].
pub fn resolve_dash_style(page: &str, explicit: Option<DashStyle>) -> DashStyle {
    if let Some(style) = explicit {
        return style;
    }

    let style = if uses_single_dash_long_names(page) {
        DashStyle::LongNames
    } else {
        DashStyle::Clustered
    };
    debug!(?style, "Detected dash style");
    style
}
