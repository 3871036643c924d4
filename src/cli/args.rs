//! Command-line argument definitions for the CSV cursor tool
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::services::field_cursor::RowLayout;

/// CLI arguments for the CSV cursor tool
///
/// Reads comma-separated files one field at a time, reports column counts,
/// extracts typed fields and appends rows entered interactively.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv-cursor",
    version,
    about = "Read CSV rows field by field with typed extraction",
    long_about = "A small tool built on a cursor-driven CSV field reader. Fields are separated by \
                  commas and rows by newlines; leading commas and spaces before a field are \
                  skipped, so empty fields are dropped. Quoting and escaping are not supported."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct GlobalArgs {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide progress output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Validate the current cursor position instead of the requested one
    /// when repositioning
    #[arg(long = "legacy-cursor-check", global = true)]
    pub legacy_cursor_check: bool,
}

impl GlobalArgs {
    /// Log level from the verbosity flags, or `None` when no flag was given
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the number of columns in the first line (or every line)
    Columns(ColumnsArgs),
    /// Extract fields from every line and write them back out
    Fields(FieldsArgs),
    /// Prompt for a new row and append it to the file
    Add(AddArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Report the column count of every line, not just the first
    #[arg(long = "all-lines")]
    pub all_lines: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct FieldsArgs {
    /// CSV file to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Column types, e.g. "s,i,d" (s, h, i, l, f, d). Without it every field
    /// is read as a string until the line is exhausted
    #[arg(short = 't', long = "types", value_name = "LIST")]
    pub types: Option<RowLayout>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the first line through without type checking
    #[arg(long = "skip-header")]
    pub skip_header: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct AddArgs {
    /// CSV file whose first line names the columns
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Column types for the new row, e.g. "s,i,d"; defaults to all strings
    #[arg(short = 't', long = "types", value_name = "LIST")]
    pub types: Option<RowLayout>,
}
