//! Purpose: `yaml_to_json` CLI entry point.
//! Role: Binary crate root; parses args, derives the output path, runs the conversion.
//! Invariants: stdout carries only the confirmation line or a usage/extension message.
//! Invariants: Other errors are emitted on stderr (text on a tty, JSON otherwise).
//! Invariants: Process exit code is derived from `to_exit_code`; usage failures exit 1.
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint, error::ErrorKind as ClapErrorKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod diagnostics;

use diagnostics::{ColorMode, emit_error, with_default_hint};
use yaml_to_json::{
    Error, ErrorKind, NOT_YAML_MESSAGE, confirmation_line, convert, derive_output_path,
    to_exit_code,
};

const USAGE: &str = "Usage: yaml_to_json <yaml_file> <json_file>";

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

#[derive(Parser)]
#[command(
    name = "yaml_to_json",
    version,
    about = "Convert a YAML document file into indented JSON",
    long_about = None,
    after_help = r#"EXAMPLES
  $ yaml_to_json config.yaml              # writes config.json
  $ yaml_to_json input.yml output.json    # explicit output, any input name
  $ yaml_to_json -- -data.yaml            # input name starting with `-`

NOTES
  Input is read as YAML 1.2: `yes`, `no`, `on`, `off` stay strings, not booleans.
  Keys that become equal as JSON strings (`1` and '1') are rejected.

Set RUST_LOG=debug for step-by-step logs on stderr."#
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[arg(
        value_name = "YAML_FILE",
        help = "YAML document to read",
        value_hint = ValueHint::FilePath
    )]
    yaml_file: PathBuf,

    #[arg(
        value_name = "JSON_FILE",
        help = "JSON file to write (default: YAML_FILE with .yaml replaced by .json)",
        value_hint = ValueHint::FilePath
    )]
    json_file: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(RunOutcome::ok());
            }
            kind => {
                debug!(?kind, "rejected command line");
                return Err((
                    Error::new(ErrorKind::Usage).with_message(USAGE),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    execute(cli)
        .map_err(with_default_hint)
        .map_err(|err| (err, color_mode))
}

fn execute(cli: Cli) -> Result<RunOutcome, Error> {
    let output = match cli.json_file {
        Some(path) => path,
        None => resolve_output_path(&cli.yaml_file)?,
    };
    debug!(
        input = %cli.yaml_file.display(),
        output = %output.display(),
        "converting"
    );
    convert(&cli.yaml_file, &output)?;
    println!("{}", confirmation_line(&output));
    Ok(RunOutcome::ok())
}

fn resolve_output_path(input: &Path) -> Result<PathBuf, Error> {
    let text = input.to_str().ok_or_else(|| {
        Error::new(ErrorKind::Usage)
            .with_message(NOT_YAML_MESSAGE)
            .with_path(input)
    })?;
    derive_output_path(text).map(PathBuf::from)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
