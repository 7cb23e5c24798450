//! CLI failures and their exit statuses.

use std::io;
use std::path::PathBuf;

use manly_extract::ManError;
use thiserror::Error;

/// Exit status when the documentation tool cannot be executed.
pub const EXIT_TOOL_UNAVAILABLE: i32 = 127;
/// Exit status for usage errors.
pub const EXIT_USAGE: i32 = 2;
/// Exit status for any other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing COMMAND\nTry 'manly --help' for more information.")]
    MissingCommand,

    #[error(transparent)]
    Man(#[from] ManError),

    #[error("failed to read '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCommand => EXIT_USAGE,
            Self::Man(ManError::Spawn { .. }) => EXIT_TOOL_UNAVAILABLE,
            Self::Man(ManError::Failed { status, .. }) => status.unwrap_or(EXIT_FAILURE),
            Self::Man(ManError::EmptyPage { .. })
            | Self::Input { .. }
            | Self::Json(_)
            | Self::Output(_) => EXIT_FAILURE,
        }
    }

    /// Text written to stderr for this error.
    ///
    /// A failing tool speaks for itself: its own diagnostic is passed
    /// through unchanged when it printed one.
    pub fn message(&self) -> String {
        match self {
            Self::Man(ManError::Failed { stderr, .. }) if !stderr.is_empty() => stderr.clone(),
            Self::Man(ManError::Spawn { binary, source }) => {
                format!("manly: could not execute '{binary}'\n{source}")
            }
            other => format!("manly: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::MissingCommand.exit_code(), 2);

        let spawn = CliError::Man(ManError::Spawn {
            binary: "man".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(spawn.exit_code(), 127);

        let failed = CliError::Man(ManError::Failed {
            binary: "man".into(),
            program: "nope".into(),
            status: Some(16),
            stderr: "No manual entry for nope".into(),
        });
        assert_eq!(failed.exit_code(), 16);

        let signalled = CliError::Man(ManError::Failed {
            binary: "man".into(),
            program: "nope".into(),
            status: None,
            stderr: String::new(),
        });
        assert_eq!(signalled.exit_code(), 1);
    }

    #[test]
    fn test_failed_tool_diagnostic_passed_through() {
        let failed = CliError::Man(ManError::Failed {
            binary: "man".into(),
            program: "nope".into(),
            status: Some(16),
            stderr: "No manual entry for nope".into(),
        });
        assert_eq!(failed.message(), "No manual entry for nope");
    }

    #[test]
    fn test_failed_tool_without_diagnostic() {
        let failed = CliError::Man(ManError::Failed {
            binary: "man".into(),
            program: "nope".into(),
            status: Some(3),
            stderr: String::new(),
        });
        assert_eq!(
            failed.message(),
            "manly: 'man' failed for 'nope' (exit status 3)"
        );
    }

    #[test]
    fn test_missing_command_message() {
        assert_eq!(
            CliError::MissingCommand.message(),
            "manly: missing COMMAND\nTry 'manly --help' for more information."
        );
    }
}
