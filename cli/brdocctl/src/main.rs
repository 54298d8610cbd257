//! brdoc - CLI for Brazilian CNPJ validation and formatting.
//!
//! Thin wrapper over `brdoc-cnpj` for shell pipelines and CI checks.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
