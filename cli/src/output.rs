//! Output formatting for extraction results.

use manly_core::Emphasis;
use manly_extract::Extraction;

/// Notice printed to stderr when nothing matched.
pub const NO_MATCHES_NOTICE: &str = "manly: No matching flags found.";

/// Formats matches as the condensed text summary.
///
/// A blank line, the title, an `=` underline as wide as the title, a blank
/// line, then each block followed by a blank line.
pub fn format_text(extraction: &Extraction, emphasis: Emphasis) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&emphasis.apply(&extraction.title));
    out.push('\n');
    out.push_str(&"=".repeat(extraction.title.chars().count()));
    out.push_str("\n\n");

    for block in &extraction.matches {
        out.push_str(&block.render(emphasis));
        out.push_str("\n\n");
    }

    out
}

/// Formats the whole extraction as pretty JSON, without emphasis.
pub fn format_json(extraction: &Extraction) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(extraction)
}
