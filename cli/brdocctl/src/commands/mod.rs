//! CLI commands.

mod dv;
mod format;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// brdoc CLI - validate, complete, and format Brazilian CNPJ identifiers.
#[derive(Debug, Parser)]
#[command(name = "brdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate complete CNPJs (base plus check digits).
    Validate(validate::ValidateCommand),

    /// Compute check digits for 12-character bases.
    Dv(dv::DvCommand),

    /// Render CNPJs in the display form XX.XXX.XXX/XXXX-XX.
    Format(format::FormatCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Validate(cmd) => cmd.run(self.format),
            Commands::Dv(cmd) => cmd.run(self.format),
            Commands::Format(cmd) => cmd.run(self.format),
        }
    }
}
