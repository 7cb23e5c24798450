//! Error types for fetching manual pages.

use thiserror::Error;

/// Errors that can occur while running the documentation tool.
#[derive(Debug, Error)]
pub enum ManError {
    /// The tool could not be started (missing binary, not executable).
    #[error("could not execute '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and reported failure, typically an unknown page.
    #[error("'{binary}' failed for '{program}'{}", status_suffix(.status))]
    Failed {
        binary: String,
        program: String,
        /// Exit status, `None` when the tool was killed by a signal.
        status: Option<i32>,
        /// Captured standard error of the tool.
        stderr: String,
    },

    /// The tool succeeded but produced no text.
    #[error("'{binary}' returned no text for '{program}'")]
    EmptyPage { binary: String, program: String },
}

fn status_suffix(status: &Option<i32>) -> String {
    status.map_or_else(
        || " (terminated by signal)".to_string(),
        |code| format!(" (exit status {code})"),
    )
}

/// Convenience alias for results with [`ManError`].
pub type Result<T> = std::result::Result<T, ManError>;
