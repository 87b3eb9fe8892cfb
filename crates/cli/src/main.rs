use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::init;
use mathfix_cli::cli::Cli;

fn main() -> Result<ExitCode> {
    init();
    Cli::parse().run()
}
