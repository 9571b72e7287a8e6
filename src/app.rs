// src/app.rs
use crate::args::Args;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::version;
use clap::error::ErrorKind;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// Turn a clap parse outcome that is not a normal parse into an exit code.
///
/// `-h` and `-v` surface as clap "errors" and exit successfully; everything
/// else prints the error with usage to stderr.
#[must_use]
pub fn handle_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayVersion => {
            let mut stdout = io::stdout().lock();
            exit_code_for(writeln!(stdout, "{}", version::banner()).and_then(|()| stdout.flush()))
        }
        ErrorKind::DisplayHelp => exit_code_for(err.print()),
        _ => {
            eprint!("{}", err.render());
            ExitCode::FAILURE
        }
    }
}

fn exit_code_for(written: io::Result<()>) -> ExitCode {
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ls2: cannot write output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// List the working directory to stdout.
///
/// # Errors
///
/// Returns an error if the listing fails or stdout cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let config = DisplayConfig::try_from(args)?;
    log::debug!("display config: {config:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_listing(&config, &mut out)
}

/// Render the listing for `config` into `out`.
///
/// # Errors
///
/// Returns an error if the listing fails or `out` cannot be written.
pub fn write_listing<W: Write>(config: &DisplayConfig, out: &mut W) -> Result<()> {
    let table = ls2_engine::run(config)?;
    out.write_all(table.as_bytes())?;
    out.flush()?;
    Ok(())
}
