//! # xlsx2prn
//!
//! Converts the first worksheet of an Excel workbook into a fixed-width PRN
//! file and a layout listing, both written next to the workbook.
//!
//! ## Usage
//!
//! ```bash
//! # Writes ventas.prn and ventas_info.txt beside ventas.xlsx
//! xlsx2prn ventas.xlsx
//!
//! # Show what is being read and written
//! RUST_LOG=debug xlsx2prn ventas.xlsx
//! ```
//!
//! The tool is meant to be used by dropping a file on the executable, so it
//! always reports through a console message and exits with status 0, even
//! when the conversion fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xlsx2prnlib::{convert, validate_input, ConvertResult};

const MSG_NO_INPUT: &str = "Arrastra un archivo Excel sobre el ejecutable.";
const MSG_INVALID_INPUT: &str = "El archivo no es válido. Asegúrate de que sea un Excel (.xlsx).";
const MSG_SUCCESS: &str = "Conversión exitosa. Archivos guardados en:";

/// What a run ended with, before it is reported on the console
enum Outcome {
    NoInput,
    InvalidInput,
    Converted(ConvertResult),
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("xlsx2prn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert the first worksheet of an .xlsx file into a fixed-width PRN file")
        .arg(
            Arg::new("file")
                .help("Excel workbook (.xlsx) to convert; further files are ignored")
                .value_parser(value_parser!(PathBuf))
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

/// First path given on the command line, if any
fn input_path(matches: &ArgMatches) -> Option<&PathBuf> {
    matches.get_many::<PathBuf>("file")?.next()
}

/// Install the log subscriber. Logs go to stderr so stdout only carries the
/// console messages.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate the input and run the conversion
fn run(matches: &ArgMatches) -> anyhow::Result<Outcome> {
    let Some(input) = input_path(matches) else {
        return Ok(Outcome::NoInput);
    };

    match validate_input(input) {
        Ok(()) => {}
        Err(e) if e.is_invalid_input() => {
            debug!("Rejected input: {e}");
            return Ok(Outcome::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    }

    let result = convert(input)?;
    Ok(Outcome::Converted(result))
}

/// Console message for a finished run
fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoInput => MSG_NO_INPUT.to_string(),
        Outcome::InvalidInput => MSG_INVALID_INPUT.to_string(),
        Outcome::Converted(result) => format!(
            "{}\n{}\n{}",
            MSG_SUCCESS,
            result.paths.prn.display(),
            result.paths.info.display()
        ),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help, --version and usage errors are printed by clap
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(&matches) {
        Ok(outcome) => println!("{}", render(&outcome)),
        Err(e) => {
            error!("Conversion failed: {e:#}");
            println!("Error: {e}");
        }
    }

    ExitCode::SUCCESS
}
