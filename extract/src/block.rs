//! Manual-page blocks: a flag headline and its description.

use manly_core::NormalizedFlag;

/// A contiguous span of manual-page text introducing one or more flags.
///
/// The first line is the headline, which usually lists synonymous spellings
/// separated by commas (`-f, --force`). The description is every following
/// line indented deeper than the headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 1-based line number of the headline in the source text.
    pub start_line: usize,
    /// Raw lines of the block, indentation included.
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(start_line: usize, lines: Vec<String>) -> Self {
        Self { start_line, lines }
    }

    /// The first line, trimmed.
    pub fn headline(&self) -> &str {
        self.lines.first().map_or("", |line| line.trim())
    }

    /// Candidate segments for flag matching.
    ///
    /// The headline split on `,` with each piece trimmed, followed by the
    /// trimmed second line when the block has one (the invocation form is
    /// sometimes wrapped onto its own line).
    pub fn headline_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.headline().split(',').map(str::trim).collect();
        if let Some(second) = self.lines.get(1) {
            segments.push(second.trim());
        }
        segments
    }

    /// Lines after the headline that are indented deeper than it.
    pub fn description(&self) -> Vec<&str> {
        let Some(first) = self.lines.first() else {
            return Vec::new();
        };
        let level = indentation(first);
        self.lines[1..]
            .iter()
            .filter(|line| !line.trim().is_empty() && indentation(line) > level)
            .map(String::as_str)
            .collect()
    }

    /// Returns `true` when any headline segment starts with `flag`.
    pub fn matches(&self, flag: &NormalizedFlag) -> bool {
        self.headline_segments()
            .iter()
            .any(|segment| segment.starts_with(flag.as_str()))
    }

    /// The block text with lines joined and trailing whitespace removed.
    pub fn text(&self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

/// Visual indentation width of `line`; tabs advance to the next multiple of 8.
pub fn indentation(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += 8 - width % 8,
            _ => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Block {
        Block::new(1, lines.iter().map(|line| line.to_string()).collect())
    }

    #[test]
    fn test_headline_segments_split_on_commas() {
        let b = block(&["       -r, -R, --recursive", "              remove directories"]);
        assert_eq!(
            b.headline_segments(),
            ["-r", "-R", "--recursive", "remove directories"]
        );
    }

    #[test]
    fn test_single_line_block_has_only_headline_segments() {
        let b = block(&["       --preserve-root"]);
        assert_eq!(b.headline_segments(), ["--preserve-root"]);
        assert!(b.description().is_empty());
    }

    #[test]
    fn test_prefix_match_not_substring() {
        let b = block(&["       -f FILE, --file=FILE", "              read from FILE"]);
        assert!(b.matches(&NormalizedFlag::new("-f")));
        assert!(b.matches(&NormalizedFlag::new("--file")));
        assert!(!b.matches(&NormalizedFlag::new("FILE")));
        assert!(!b.matches(&NormalizedFlag::new("-i")));
    }

    #[test]
    fn test_wrapped_second_line_is_a_segment() {
        let b = block(&[
            "       --time-style=TIME_STYLE,",
            "       --format=WORD",
            "              across -x, commas -m",
        ]);
        assert!(b.matches(&NormalizedFlag::new("--format")));
    }

    #[test]
    fn test_description_only_deeper_lines() {
        let b = block(&[
            "       -a, --all",
            "              do not ignore entries starting with .",
            "       trailing boilerplate",
        ]);
        assert_eq!(
            b.description(),
            ["              do not ignore entries starting with ."]
        );
    }

    #[test]
    fn test_indentation_counts_tabs() {
        assert_eq!(indentation("    -a"), 4);
        assert_eq!(indentation("\t-a"), 8);
        assert_eq!(indentation("  \t-a"), 8);
        assert_eq!(indentation("-a"), 0);
    }

    #[test]
    fn test_text_trims_trailing_whitespace() {
        let b = block(&["       -a  ", "              all   "]);
        assert_eq!(b.text(), "       -a  \n              all");
    }
}
