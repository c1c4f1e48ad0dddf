//! Command-line interface for ranking candidate uploads.
//!
//! `hirematch rank` reads a recruiter CSV, scores every row with the fuzzy
//! (or legacy additive) engine and prints the ranked result as JSON.
//! `hirematch system` prints the fuzzy system definition the engine uses.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod candidates;
mod error;
mod rank;
mod system;
mod telemetry;

pub use error::CliError;
pub use telemetry::TelemetryError;

use rank::RankArgs;
use system::SystemArgs;

pub(crate) const ARG_RANK_CANDIDATES: &str = "candidates";
pub(crate) const ARG_RANK_REQUIRED_SKILLS: &str = "required-skills";
pub(crate) const ARG_RANK_MIN_CGPA: &str = "min-cgpa";
pub(crate) const ARG_RANK_MIN_EXPERIENCE: &str = "min-experience";
pub(crate) const ARG_RANK_EXPERIENCE_POLICY: &str = "experience-policy";
pub(crate) const ARG_RANK_EXPERIENCE_THRESHOLD: &str = "experience-threshold";
pub(crate) const ARG_RANK_SKILL_MODE: &str = "skill-mode";
pub(crate) const ARG_RANK_MODE: &str = "mode";
pub(crate) const ARG_RANK_TIMEOUT_MS: &str = "timeout-ms";
pub(crate) const ARG_RANK_WORKERS: &str = "workers";
pub(crate) const ARG_FUZZY_SYSTEM: &str = "fuzzy-system";
pub(crate) const ENV_RANK_CANDIDATES: &str = "HIREMATCH_CMDS_RANK_CANDIDATES";
pub(crate) const ENV_RANK_REQUIRED_SKILLS: &str = "HIREMATCH_CMDS_RANK_REQUIRED_SKILLS";

/// Run the hirematch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// when scoring is abandoned, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    telemetry::init(telemetry::DEFAULT_FILTER)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::System(args) => system::run_system(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hirematch",
    about = "Rank job candidates with fuzzy match scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank the candidates in a CSV upload.
    Rank(RankArgs),
    /// Print or validate a fuzzy system definition.
    System(SystemArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
