mod cli;
mod config;
mod convert;
mod date_cmd;
mod grid_cmd;
mod logging;
mod replay_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Grid(args) => grid_cmd::run(args),
        Command::Format(args) => date_cmd::run_format(args),
        Command::Parse(args) => date_cmd::run_parse(args),
        Command::Replay(args) => replay_cmd::run(args),
    }
}
