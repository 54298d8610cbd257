//! Check-digit computation for CNPJ bases.

use anyhow::Result;
use brdoc_cnpj::Cnpj;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, OutputFormat};

/// Compute check digits for one or more bases.
#[derive(Debug, Args)]
pub struct DvCommand {
    /// 12-character CNPJ bases, with or without separators.
    #[arg(required = true)]
    bases: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct DvRow {
    #[tabled(rename = "Base")]
    base: String,

    #[tabled(rename = "DV")]
    check_digits: String,

    #[tabled(rename = "Complete")]
    complete: String,

    #[tabled(rename = "Formatted")]
    formatted: String,
}

impl DvCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let mut rows = Vec::with_capacity(self.bases.len());
        for input in &self.bases {
            let cnpj = Cnpj::from_base(input).map_err(|source| CliError::Invalid {
                input: input.clone(),
                source,
            })?;
            rows.push(DvRow {
                base: cnpj.base().to_string(),
                check_digits: cnpj.check_digits().to_string(),
                complete: cnpj.as_str().to_string(),
                formatted: cnpj.formatted(),
            });
        }

        print_output(&rows, format);
        Ok(())
    }
}
