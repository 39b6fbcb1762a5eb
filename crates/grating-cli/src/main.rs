//! `grating` — compose SLM gratings from images, patterns and blazes.

use std::process::ExitCode;

use clap::Parser;
use grating_cli::cli::Cli;
use grating_cli::{Config, logging, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match Config::from_cli(cli).and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
