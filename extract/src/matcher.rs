//! Matching blocks against candidate flags.

use manly_core::{Emphasis, NormalizedFlag};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::block::Block;

/// A block whose headline matched one of the requested flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockMatch {
    /// The flag that matched (the first in candidate order).
    pub flag: NormalizedFlag,
    /// 1-based line number of the block's headline.
    pub line: usize,
    /// The headline, trimmed.
    pub headline: String,
    /// Description lines (deeper than the headline), trimmed.
    pub description: Vec<String>,
    /// The block text, trailing whitespace removed, without emphasis.
    pub text: String,
}

impl BlockMatch {
    /// Renders the block text with every whitespace-led occurrence of the
    /// matched flag emphasized.
    ///
    /// The whitespace before each occurrence is kept. Plain emphasis
    /// returns the text unchanged.
    pub fn render(&self, emphasis: Emphasis) -> String {
        if !emphasis.is_enabled() {
            return self.text.clone();
        }

        let pattern = format!(r"(^|\s){}", regex::escape(self.flag.as_str()));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                debug!(flag = %self.flag, error = %e, "Emphasis pattern rejected");
                return self.text.clone();
            }
        };

        let marked = emphasis.apply(self.flag.as_str());
        re.replace_all(&self.text, |caps: &Captures<'_>| format!("{}{marked}", &caps[1]))
            .trim_end()
            .to_string()
    }
}

/// Selects the blocks whose headline matches any of `flags`.
///
/// Blocks are returned in source order and each block at most once. Flags
/// are tried in the order given and the first one that matches a block is
/// recorded for it.
pub fn match_blocks(blocks: &[Block], flags: &[NormalizedFlag]) -> Vec<BlockMatch> {
    let mut out = Vec::new();

    for block in blocks {
        let Some(flag) = flags.iter().find(|flag| block.matches(flag)) else {
            continue;
        };

        out.push(BlockMatch {
            flag: flag.clone(),
            line: block.start_line,
            headline: block.headline().to_string(),
            description: block
                .description()
                .into_iter()
                .map(|line| line.trim().to_string())
                .collect(),
            text: block.text(),
        });
    }

    debug!(
        blocks = blocks.len(),
        flags = flags.len(),
        matches = out.len(),
        "Matched blocks"
    );
    out
}
