//! Indentation-span segmentation.

use crate::block::{Block, indentation};

/// Splits `text` into one block per indented flag headline.
///
/// A headline is an indented line whose first non-blank character is `-`
/// followed by a non-space character. Its block extends over the following
/// lines indented deeper than the headline; blank lines inside the span are
/// kept, and the span ends at the first non-blank line at or above the
/// headline's indentation. Dash lines nested inside a span belong to that
/// span and do not start blocks of their own.
pub fn segment_spans(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        if !is_headline(line) {
            idx += 1;
            continue;
        }

        let level = indentation(line);
        let mut end = idx + 1;
        for (offset, next) in lines[idx + 1..].iter().enumerate() {
            if next.trim().is_empty() {
                continue;
            }
            if indentation(next) <= level {
                break;
            }
            end = idx + 1 + offset + 1;
        }

        blocks.push(Block::new(
            idx + 1,
            lines[idx..end].iter().map(|line| line.to_string()).collect(),
        ));
        idx = end;
    }

    blocks
}

fn is_headline(line: &str) -> bool {
    if indentation(line) == 0 {
        return false;
    }
    let mut chars = line.trim_start().chars();
    chars.next() == Some('-') && chars.next().is_some_and(|ch| !ch.is_whitespace())
}
