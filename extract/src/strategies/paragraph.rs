//! Blank-line segmentation.

use crate::block::Block;

/// Splits `text` into blocks at blank lines.
///
/// A blank line is empty or whitespace-only. Consecutive blank lines produce
/// no empty blocks, and a final block without a closing blank line is kept.
pub fn segment_paragraphs(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut start_line = 0;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(Block::new(start_line, std::mem::take(&mut current)));
            }
            continue;
        }

        if current.is_empty() {
            start_line = idx + 1;
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        blocks.push(Block::new(start_line, current));
    }

    blocks
}
