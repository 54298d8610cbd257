//! Validation verdicts for complete CNPJs.

use anyhow::Result;
use brdoc_cnpj::validate;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, OutputFormat};

/// Validate one or more CNPJs.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// CNPJs to validate, with or without separators.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidateRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Errors")]
    errors: String,
}

impl ValidateCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let mut failed = 0usize;
        let rows: Vec<ValidateRow> = self
            .inputs
            .iter()
            .map(|input| {
                let report = validate(input);
                if !report.is_valid {
                    failed += 1;
                }
                ValidateRow {
                    input: input.clone(),
                    valid: report.is_valid,
                    errors: report.errors.map(|e| e.join("; ")).unwrap_or_default(),
                }
            })
            .collect();

        print_output(&rows, format);

        if failed > 0 {
            return Err(CliError::SomeInvalid {
                failed,
                total: self.inputs.len(),
            }
            .into());
        }
        Ok(())
    }
}
