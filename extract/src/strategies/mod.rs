//! Block segmentation strategies.
//!
//! Both strategies produce the same conceptual blocks (headline plus
//! description) but can disagree on boundary lines for unusually formatted
//! pages:
//!
//! - [`Strategy::Paragraph`] splits at blank lines (the default).
//! - [`Strategy::Indent`] starts a block at each indented dash line and ends
//!   it where indentation returns to the headline's level.

pub mod indent;
pub mod paragraph;

use crate::block::Block;

/// Block segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Blank-line delimited paragraphs.
    #[default]
    Paragraph,
    /// Indentation spans under dash headlines.
    Indent,
}

impl Strategy {
    /// Segments `text` into blocks using this strategy.
    pub fn segment(self, text: &str) -> Vec<Block> {
        match self {
            Self::Paragraph => paragraph::segment_paragraphs(text),
            Self::Indent => indent::segment_spans(text),
        }
    }
}
