//! ent: entropy and randomness statistics for a file or standard input.

mod error;
mod input;
mod output;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use ent_core::Mode;
use log::debug;

use crate::error::CliError;
use crate::output::Format;

/// Exit status for unreadable input and other runtime failures. clap uses
/// the same status for bad arguments.
const EXIT_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "ent")]
#[command(about = "ent -- Calculate entropy of file. Reads standard input when no file is given.")]
#[command(version = ent_core::VERSION)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Treat input as a stream of bits
    #[arg(short = 'b', short_alias = 'B', long = "bits")]
    bits: bool,

    /// Fold upper to lower case letters
    #[arg(short = 'f', short_alias = 'F', long)]
    fold: bool,

    /// Terse output in CSV format
    #[arg(short = 't', short_alias = 'T', long, conflicts_with = "json")]
    terse: bool,

    /// Print the full report, including symbol counts, as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// Print this message
    #[arg(short = 'u', short_aliases = ['U', '?'], long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Input file
    file: Option<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.bits { Mode::Bit } else { Mode::Byte }
    }

    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else if self.terse {
            Format::Terse
        } else {
            Format::Human
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = cli.mode();
    debug!("mode={mode}, fold={}, format={:?}", cli.fold, cli.format());

    let reader = input::open(cli.file.as_deref())?;
    let report = input::analyze_reader(reader, mode, cli.fold)?;

    let mut stdout = io::stdout().lock();
    output::write_report(&mut stdout, &report, cli.format())?;
    stdout.flush().map_err(CliError::Write)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
