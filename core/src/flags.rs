//! Flag normalization.
//!
//! Turns the tokens a user typed after the program name into the set of
//! candidate flags to look for in the manual page.

use std::collections::HashSet;

use crate::types::{DashStyle, NormalizedFlag};

/// Normalizes raw command-line tokens into candidate flags.
///
/// Tokens that do not start with `-` are dropped. Double-dash tokens are kept
/// whole. Single-dash tokens are split per character under
/// [`DashStyle::Clustered`]. Under [`DashStyle::LongNames`] the whole token
/// comes first, followed by its per-character split.
/// Any `=value` suffix is stripped. The result keeps the order in which
/// flags first appear and contains no duplicates.
///
/// # Examples
///
/// ```
/// use manly_core::{DashStyle, normalize_flags};
///
/// let flags = normalize_flags(["--preserve-root", "-rf", "file.txt"], DashStyle::Clustered);
/// let names: Vec<&str> = flags.iter().map(|f| f.as_str()).collect();
/// assert_eq!(names, ["--preserve-root", "-r", "-f"]);
///
/// let flags = normalize_flags(["-ef"], DashStyle::LongNames);
/// let names: Vec<&str> = flags.iter().map(|f| f.as_str()).collect();
/// assert_eq!(names, ["-ef", "-e", "-f"]);
/// ```
pub fn normalize_flags<I, S>(tokens: I, style: DashStyle) -> Vec<NormalizedFlag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for token in tokens {
        for flag in normalize_token(token.as_ref(), style) {
            if seen.insert(flag.clone()) {
                out.push(NormalizedFlag::new(flag));
            }
        }
    }

    out
}

/// Normalizes a single token. Returns an empty vector for non-flags.
fn normalize_token(token: &str, style: DashStyle) -> Vec<String> {
    if !token.starts_with('-') {
        return Vec::new();
    }

    let name = strip_value(token);

    if name.starts_with("--") {
        if name.len() == 2 {
            return Vec::new();
        }
        return vec![name.to_string()];
    }

    let body = &name[1..];
    if body.is_empty() {
        return Vec::new();
    }

    let letters = body.chars().map(|ch| format!("-{ch}"));
    match style {
        DashStyle::LongNames if body.chars().count() > 1 => {
            std::iter::once(name.to_string()).chain(letters).collect()
        }
        DashStyle::LongNames | DashStyle::Clustered => letters.collect(),
    }
}

/// Strips an attached `=value` at the first `=`.
fn strip_value(token: &str) -> &str {
    token.split_once('=').map_or(token, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(flags: &[NormalizedFlag]) -> Vec<&str> {
        flags.iter().map(NormalizedFlag::as_str).collect()
    }

    #[test]
    fn test_cluster_splits_one_flag_per_letter() {
        let flags = normalize_flags(["-abc"], DashStyle::Clustered);
        assert_eq!(names(&flags), ["-a", "-b", "-c"]);
    }

    #[test]
    fn test_long_flag_kept_and_value_stripped() {
        let flags = normalize_flags(["--color=always", "--all"], DashStyle::Clustered);
        assert_eq!(names(&flags), ["--color", "--all"]);
    }

    #[test]
    fn test_long_flag_unaffected_by_dash_style() {
        let flags = normalize_flags(["--block-size=1K"], DashStyle::LongNames);
        assert_eq!(names(&flags), ["--block-size"]);
    }

    #[test]
    fn test_non_flags_are_discarded() {
        let flags = normalize_flags(["file.txt", "-", "--", "x-y"], DashStyle::Clustered);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_single_dash_long_names_kept_whole_then_split() {
        let flags = normalize_flags(["-std=c99", "-c"], DashStyle::LongNames);
        assert_eq!(names(&flags), ["-std", "-s", "-t", "-d", "-c"]);
    }

    #[test]
    fn test_long_names_still_yield_cluster_letters() {
        let flags = normalize_flags(["-ef", "-fe"], DashStyle::LongNames);
        assert_eq!(names(&flags), ["-ef", "-e", "-f", "-fe"]);
    }

    #[test]
    fn test_duplicates_removed_in_first_seen_order() {
        let flags = normalize_flags(["-la", "-al", "--all", "--all"], DashStyle::Clustered);
        assert_eq!(names(&flags), ["-l", "-a", "--all"]);
    }

    #[test]
    fn test_clustered_value_suffix_not_split() {
        let flags = normalize_flags(["-o=out"], DashStyle::Clustered);
        assert_eq!(names(&flags), ["-o"]);
    }

    #[test]
    fn test_no_tokens_yields_no_flags() {
        let flags = normalize_flags(Vec::<String>::new(), DashStyle::Clustered);
        assert!(flags.is_empty());
    }
}
