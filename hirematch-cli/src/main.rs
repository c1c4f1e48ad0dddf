//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use hirematch_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() -> ExitCode {
    match hirematch_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("hirematch: {err}");
            ExitCode::FAILURE
        }
    }
}
