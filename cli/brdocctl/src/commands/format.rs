//! Display formatting for CNPJs.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, OutputFormat};

/// Format one or more CNPJs for display.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// 14-character CNPJs, with or without separators.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct FormatRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Formatted")]
    formatted: String,
}

impl FormatCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let mut rows = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            let formatted =
                brdoc_cnpj::format(input).map_err(|source| CliError::Invalid {
                    input: input.clone(),
                    source,
                })?;
            rows.push(FormatRow {
                input: input.clone(),
                formatted,
            });
        }

        print_output(&rows, format);
        Ok(())
    }
}
