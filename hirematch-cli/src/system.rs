//! `system` command: print a fuzzy system definition as JSON.
//!
//! Without arguments the built-in hiring system is printed, giving recruiters
//! a starting point for `rank --fuzzy-system`. With a path the definition is
//! validated and printed back in canonical form.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use hirematch_fuzzy::{FuzzySystem, SystemDefinition, reference};

use crate::rank::load_fuzzy_system;
use crate::{ARG_FUZZY_SYSTEM, CliError};

/// CLI arguments for the `system` subcommand.
#[derive(Debug, Clone, Default, Parser)]
#[command(about = "Print the reference fuzzy system, or validate a custom one")]
pub(crate) struct SystemArgs {
    /// JSON fuzzy system definition to validate.
    #[arg(long = ARG_FUZZY_SYSTEM, value_name = "path")]
    pub(crate) fuzzy_system: Option<Utf8PathBuf>,
}

pub(super) fn run_system(args: &SystemArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_system_with(args, &mut stdout)
}

pub(super) fn run_system_with(args: &SystemArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let system = resolve_system(args)?;
    crate::write_json(writer, &SystemDefinition::from(&system))
}

fn resolve_system(args: &SystemArgs) -> Result<FuzzySystem, CliError> {
    match &args.fuzzy_system {
        Some(path) => load_fuzzy_system(path),
        None => reference::hiring_system().map_err(CliError::ReferenceSystem),
    }
}
