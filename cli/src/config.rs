//! Runtime settings resolved once at startup.
//!
//! Everything that depends on process-wide state (whether stdout is a
//! terminal, environment variables) is captured here in `main` and passed
//! down explicitly.

use std::env;
use std::io::{self, IsTerminal};

use manly_core::{DashStyle, Emphasis};
use manly_extract::Strategy;
use manly_extract::man::{DEFAULT_MAN_BINARY, DEFAULT_MAN_WIDTH, ManCommand};

/// Environment variable naming the documentation tool.
pub const MAN_BINARY_ENV: &str = "MANLY_MAN";
/// Environment variable forcing the `MANWIDTH` passed to the tool.
pub const MAN_WIDTH_ENV: &str = "MANLY_MANWIDTH";

/// Columns kept free when deriving the width from the terminal.
const TERMINAL_PADDING: u16 = 4;
/// Narrowest width requested from the tool.
const MIN_MAN_WIDTH: u16 = 20;

/// When to emphasize output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Only when stdout is a terminal and `NO_COLOR` is unset.
    Auto,
    Always,
    Never,
}

/// How single-dash tokens are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DashStyleChoice {
    /// Detect from the manual page.
    Auto,
    /// `-la` means `-l -a`.
    Clustered,
    /// `-nostdinc` is searched whole as well as letter by letter.
    Long,
}

impl DashStyleChoice {
    fn resolve(self) -> Option<DashStyle> {
        match self {
            Self::Auto => None,
            Self::Clustered => Some(DashStyle::Clustered),
            Self::Long => Some(DashStyle::LongNames),
        }
    }
}

/// Snapshot of the process environment relevant to `manly`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub stdout_is_terminal: bool,
    pub no_color: bool,
    pub man_binary: Option<String>,
    pub man_width: Option<String>,
    pub columns: Option<String>,
}

impl Environment {
    /// Reads the current process environment.
    pub fn capture() -> Self {
        Self {
            stdout_is_terminal: io::stdout().is_terminal(),
            no_color: env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
            man_binary: env::var(MAN_BINARY_ENV).ok().filter(|value| !value.is_empty()),
            man_width: env::var(MAN_WIDTH_ENV).ok(),
            columns: env::var("COLUMNS").ok(),
        }
    }
}

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub emphasis: Emphasis,
    pub man_binary: String,
    pub man_width: u16,
    pub dash_style: Option<DashStyle>,
    pub strategy: Strategy,
}

impl Settings {
    pub fn resolve(
        color: ColorChoice,
        dash_style: DashStyleChoice,
        strategy: Strategy,
        env: &Environment,
    ) -> Self {
        Self {
            emphasis: resolve_emphasis(color, env),
            man_binary: env
                .man_binary
                .clone()
                .unwrap_or_else(|| DEFAULT_MAN_BINARY.to_string()),
            man_width: resolve_man_width(env),
            dash_style: dash_style.resolve(),
            strategy,
        }
    }

    pub fn man_command(&self) -> ManCommand {
        ManCommand::new(self.man_binary.clone()).with_width(self.man_width)
    }
}

fn resolve_emphasis(color: ColorChoice, env: &Environment) -> Emphasis {
    let enabled = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => env.stdout_is_terminal && !env.no_color,
    };
    if enabled {
        Emphasis::Bold
    } else {
        Emphasis::Plain
    }
}

/// Width passed to the tool as `MANWIDTH`.
///
/// An explicit `MANLY_MANWIDTH` wins. Otherwise, on a terminal with a usable
/// `COLUMNS`, the terminal width minus padding capped at 80. Otherwise 80.
fn resolve_man_width(env: &Environment) -> u16 {
    if let Some(width) = env
        .man_width
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u16>().ok())
        .filter(|width| *width > 0)
    {
        return width;
    }

    if env.stdout_is_terminal
        && let Some(columns) = env
            .columns
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u16>().ok())
    {
        return columns
            .saturating_sub(TERMINAL_PADDING)
            .clamp(MIN_MAN_WIDTH, DEFAULT_MAN_WIDTH);
    }

    DEFAULT_MAN_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Environment {
        Environment {
            stdout_is_terminal: true,
            ..Environment::default()
        }
    }

    #[test]
    fn test_auto_color_follows_terminal() {
        assert_eq!(resolve_emphasis(ColorChoice::Auto, &terminal()), Emphasis::Bold);
        assert_eq!(
            resolve_emphasis(ColorChoice::Auto, &Environment::default()),
            Emphasis::Plain
        );
    }

    #[test]
    fn test_no_color_disables_auto_only() {
        let env = Environment {
            no_color: true,
            ..terminal()
        };
        assert_eq!(resolve_emphasis(ColorChoice::Auto, &env), Emphasis::Plain);
        assert_eq!(resolve_emphasis(ColorChoice::Always, &env), Emphasis::Bold);
    }

    #[test]
    fn test_never_color_on_terminal() {
        assert_eq!(resolve_emphasis(ColorChoice::Never, &terminal()), Emphasis::Plain);
    }

    #[test]
    fn test_width_defaults_to_80() {
        assert_eq!(resolve_man_width(&Environment::default()), 80);
    }

    #[test]
    fn test_width_from_columns_is_padded_and_capped() {
        let env = Environment {
            columns: Some("60".into()),
            ..terminal()
        };
        assert_eq!(resolve_man_width(&env), 56);

        let env = Environment {
            columns: Some("200".into()),
            ..terminal()
        };
        assert_eq!(resolve_man_width(&env), 80);
    }

    #[test]
    fn test_columns_ignored_when_not_a_terminal() {
        let env = Environment {
            columns: Some("60".into()),
            ..Environment::default()
        };
        assert_eq!(resolve_man_width(&env), 80);
    }

    #[test]
    fn test_explicit_width_wins() {
        let env = Environment {
            man_width: Some("120".into()),
            columns: Some("60".into()),
            ..terminal()
        };
        assert_eq!(resolve_man_width(&env), 120);

        let env = Environment {
            man_width: Some("wide".into()),
            ..Environment::default()
        };
        assert_eq!(resolve_man_width(&env), 80);
    }

    #[test]
    fn test_settings_resolve_binary_and_dash_style() {
        let env = Environment {
            man_binary: Some("/opt/bin/man".into()),
            ..Environment::default()
        };
        let settings = Settings::resolve(
            ColorChoice::Auto,
            DashStyleChoice::Long,
            Strategy::Indent,
            &env,
        );
        assert_eq!(settings.man_binary, "/opt/bin/man");
        assert_eq!(settings.dash_style, Some(DashStyle::LongNames));
        assert_eq!(settings.strategy, Strategy::Indent);
        assert_eq!(settings.man_command().binary(), "/opt/bin/man");

        let settings = Settings::resolve(
            ColorChoice::Auto,
            DashStyleChoice::Auto,
            Strategy::Paragraph,
            &Environment::default(),
        );
        assert_eq!(settings.man_binary, "man");
        assert_eq!(settings.dash_style, None);
    }
}
