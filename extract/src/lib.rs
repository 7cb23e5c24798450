//! Flag lookup in rendered manual pages.
//!
//! This crate turns the text printed by `man` into the handful of blocks
//! that document the flags a user asked about.
//!
//! # Main entry points
//!
//! - [`extract_flags`]: parse pre-captured page text; no process is run.
//! - [`man::ManCommand::fetch`]: run the documentation tool for a program.
//!
//! The pipeline is: [`normalize::normalize_page`] → dash style detection
//! ([`detect::resolve_dash_style`]) → flag normalization
//! ([`manly_core::normalize_flags`]) → block segmentation
//! ([`Strategy::segment`]) → matching ([`matcher::match_blocks`]).
//!
//! # Example
//!
//! ```
//! use manly_extract::{ExtractOptions, extract_flags};
//!
//! let page = "\
//! NAME
//!        rm - remove files or directories
//!
//! OPTIONS
//!
//!        -f, --force
//!               ignore nonexistent files and arguments, never prompt
//!
//!        -i     prompt before every removal
//! ";
//!
//! let extraction = extract_flags("rm", page, &["-f"], &ExtractOptions::default());
//! assert_eq!(extraction.title, "rm - remove files or directories");
//! assert_eq!(extraction.matches.len(), 1);
//! assert_eq!(extraction.matches[0].headline, "-f, --force");
//! ```

pub mod block;
pub mod detect;
pub mod error;
pub mod man;
pub mod matcher;
pub mod normalize;
pub mod sections;
pub mod strategies;

use manly_core::{DashStyle, NormalizedFlag, normalize_flags};
use serde::Serialize;
use tracing::debug;

pub use block::Block;
pub use error::{ManError, Result};
pub use matcher::BlockMatch;
pub use strategies::Strategy;

/// Knobs for [`extract_flags`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Forced dash style; `None` detects it from the page.
    pub dash_style: Option<DashStyle>,
    /// Block segmentation strategy.
    pub strategy: Strategy,
}

/// The outcome of looking up flags in one manual page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// The program the page belongs to.
    pub program: String,
    /// One-line description from the NAME section, or the program name.
    pub title: String,
    /// The dash style used to normalize single-dash tokens.
    pub dash_style: DashStyle,
    /// Candidate flags searched for.
    pub flags: Vec<NormalizedFlag>,
    /// Matched blocks in document order.
    pub matches: Vec<BlockMatch>,
}

/// Looks up `tokens` in the rendered page text of `program`.
///
/// Tokens are the raw arguments that followed the program name; non-flags
/// are ignored. An empty match list is a normal outcome.
pub fn extract_flags<S: AsRef<str>>(
    program: &str,
    page: &str,
    tokens: &[S],
    options: &ExtractOptions,
) -> Extraction {
    let text = normalize::normalize_page(page);
    let dash_style = detect::resolve_dash_style(&text, options.dash_style);
    let flags = normalize_flags(tokens, dash_style);
    debug!(program, ?flags, "Normalized flags");

    let blocks = options.strategy.segment(&text);
    let matches = matcher::match_blocks(&blocks, &flags);
    let title = sections::page_title(&text).unwrap_or_else(|| program.to_string());

    Extraction {
        program: program.to_string(),
        title,
        dash_style,
        flags,
        matches,
    }
}
