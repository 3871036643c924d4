use anyhow::Context;
use clap::Parser;
use csv_cursor::cli::{
    args::{Args, Commands},
    commands,
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print the whole context chain and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let (command, input) = match &args.command {
        Commands::Columns(a) => ("columns", a.input.clone()),
        Commands::Fields(a) => ("fields", a.input.clone()),
        Commands::Add(a) => ("add", a.input.clone()),
    };

    commands::run(args)
        .with_context(|| format!("{} failed for {}", command, input.display()))
}
