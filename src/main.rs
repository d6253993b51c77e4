//! qrcli: turn text or a URL into a QR code.

use std::process::ExitCode;

use clap::Parser;
use qrcli::cli::{self, Cli};
use qrcli::Error;

fn main() -> ExitCode {
    // Usage errors exit here with clap's diagnostics and code 2.
    let args = Cli::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, Error::Usage(_)) {
                eprintln!("Run 'qrcli --help' for usage information.");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
