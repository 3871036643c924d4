//! Command implementations for the CSV cursor CLI
//!
//! Each subcommand lives in its own module:
//! - `columns`: column counting
//! - `fields`: batch field extraction with statistics
//! - `add`: interactive row entry

pub mod add;
pub mod columns;
pub mod fields;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};
use shared::{load_configuration, setup_logging};

/// Main command runner
///
/// Loads configuration, installs logging and dispatches to the subcommand.
pub fn run(args: Args) -> Result<()> {
    let config = load_configuration(&args.global)?;
    setup_logging(&config, &args.global)?;

    match &args.command {
        Commands::Columns(columns_args) => columns::run_columns(columns_args, &config),
        Commands::Fields(fields_args) => {
            fields::run_fields(fields_args, &config, &args.global).map(|_| ())
        }
        Commands::Add(add_args) => add::run_add(add_args, &config),
    }
}
