//! Fetching rendered manual pages from the system documentation tool.
//!
//! The tool is run once, synchronously, as `man -- PROGRAM` with `MANWIDTH`
//! set so the layout does not depend on the caller's terminal. There is no
//! timeout: a hung tool hangs the caller.
//!
//! # Example
//!
//! ```no_run
//! use manly_extract::man::ManCommand;
//!
//! let page = ManCommand::default().with_width(80).fetch("ls")?;
//! assert!(page.contains("NAME"));
//! # Ok::<(), manly_extract::ManError>(())
//! ```

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ManError, Result};

/// Default documentation tool.
pub const DEFAULT_MAN_BINARY: &str = "man";

/// Default and maximum column width requested from the tool.
pub const DEFAULT_MAN_WIDTH: u16 = 80;

/// A configured invocation of the documentation tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManCommand {
    binary: String,
    width: u16,
}

impl Default for ManCommand {
    fn default() -> Self {
        Self::new(DEFAULT_MAN_BINARY)
    }
}

impl ManCommand {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            width: DEFAULT_MAN_WIDTH,
        }
    }

    /// Sets the `MANWIDTH` passed to the tool.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Runs the tool for `program` and returns its rendered text.
    ///
    /// Standard output is decoded lossily as UTF-8. A non-zero exit becomes
    /// [`ManError::Failed`] carrying the tool's status and standard error.
    pub fn fetch(&self, program: &str) -> Result<String> {
        debug!(binary = %self.binary, program, width = self.width, "Running man");

        let output = Command::new(&self.binary)
            .arg("--")
            .arg(program)
            .env("MANWIDTH", self.width.to_string())
            .env("MANPAGER", "cat")
            .env("PAGER", "cat")
            .env_remove("MAN_KEEP_FORMATTING")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ManError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(
                program,
                status = ?output.status.code(),
                stderr = %stderr,
                "man reported failure"
            );
            return Err(ManError::Failed {
                binary: self.binary.clone(),
                program: program.to_string(),
                status: output.status.code(),
                stderr,
            });
        }

        let page = String::from_utf8_lossy(&output.stdout).into_owned();
        if page.trim().is_empty() {
            return Err(ManError::EmptyPage {
                binary: self.binary.clone(),
                program: program.to_string(),
            });
        }

        debug!(program, bytes = page.len(), "Fetched manual page");
        Ok(page)
    }
}
