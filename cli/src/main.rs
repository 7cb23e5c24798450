mod config;
mod error;
mod output;

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use manly_extract::{ExtractOptions, Strategy, extract_flags};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{ColorChoice, DashStyleChoice, Environment, Settings};
use error::CliError;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (c) 2017 Carl Bordum Hansen.\n",
    "MIT License: see LICENSE.\n\n",
    "Written by Carl Bordum Hansen and Mark Jameson."
);

const USAGE_EXAMPLE: &str = "\
example:
    $ manly rm --preserve-root -rf

    rm - remove files or directories
    ================================

           -f, --force
                  ignore nonexistent files and arguments, never prompt

           --preserve-root[=all]
                  do not remove '/' (default); with 'all', reject any command
                  line argument on a separate device from its parent

           -r, -R, --recursive
                  remove directories and their contents recursively";

#[derive(Debug, Parser)]
#[command(name = "manly")]
#[command(about = "Explain how FLAGS modify a COMMAND's behaviour.")]
#[command(version = VERSION, disable_version_flag = true, after_help = USAGE_EXAMPLE)]
struct Cli {
    /// Print version information and exit.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
    /// When to emphasize the title and matched flags.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    /// How single-dash tokens such as `-abc` are read.
    #[arg(long, value_enum, default_value_t = DashStyleChoice::Auto)]
    dash_style: DashStyleChoice,
    /// How the manual page is divided into flag blocks.
    #[arg(long, value_enum, default_value_t = Strategy::Paragraph)]
    strategy: Strategy,
    /// Read rendered manual text from FILE ('-' for stdin) instead of running man.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// The command to look up, followed by the flags to explain.
    #[arg(
        value_name = "COMMAND",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let env = Environment::capture();
    if let Err(err) = run(cli, &env) {
        debug!(error = ?err, "manly failed");
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli, env: &Environment) -> Result<(), CliError> {
    let Some((program, tokens)) = cli.command.split_first() else {
        return Err(CliError::MissingCommand);
    };

    let settings = Settings::resolve(cli.color, cli.dash_style, cli.strategy, env);
    debug!(?settings, "Resolved settings");

    let page = match &cli.input {
        Some(path) => read_input(path)?,
        None => settings.man_command().fetch(program)?,
    };

    let options = ExtractOptions {
        dash_style: settings.dash_style,
        strategy: settings.strategy,
    };
    let extraction = extract_flags(program, &page, tokens, &options);

    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", output::format_json(&extraction)?)?;
    } else if !extraction.matches.is_empty() {
        write!(stdout, "{}", output::format_text(&extraction, settings.emphasis))?;
    }
    stdout.flush()?;

    if extraction.matches.is_empty() {
        eprintln!("{}", output::NO_MATCHES_NOTICE);
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let result = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };

    result.map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}
