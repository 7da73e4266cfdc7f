mod cli;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cli::{dispatch, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    ghar::logging::init();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
