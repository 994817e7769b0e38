use std::process::ExitCode;

use clap::Parser;

use crate::cli::app::{App, Commands};
use crate::config::Config;

mod cli;
mod config;
mod logging;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: App) -> anyhow::Result<()> {
    let config = Config::load(app.config.as_deref())?;

    match app.cmd {
        Commands::Pack(arg) => arg.run(config),
        Commands::Check(arg) => arg.run(&config),
        Commands::Header(arg) => arg.run(&config),
    }
}
