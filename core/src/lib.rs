//! Core types and flag normalization for `manly`.
//!
//! This crate holds the pieces of `manly` that need no I/O:
//!
//! - [`NormalizedFlag`]: a canonical flag string to search for.
//! - [`DashStyle`]: whether single-dash tokens are clusters (`-la`) or
//!   single-dash long names (`-nostdinc`).
//! - [`Emphasis`]: terminal emphasis for matched tokens.
//! - [`normalize_flags`]: the flag normalizer.
//!
//! Manual-page parsing lives in `manly-extract`.
//!
//! # Example
//!
//! ```
//! use manly_core::*;
//!
//! let flags = normalize_flags(["-la", "--color=auto", "somedir"], DashStyle::Clustered);
//! let names: Vec<String> = flags.iter().map(ToString::to_string).collect();
//! assert_eq!(names, ["-l", "-a", "--color"]);
//! ```

mod flags;
mod types;

pub use flags::normalize_flags;
pub use types::*;
