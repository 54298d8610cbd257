//! Error handling and display for the CLI.

use brdoc_cnpj::CnpjError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: CnpjError,
    },

    #[error("{failed} of {total} inputs failed validation")]
    SomeInvalid { failed: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Surface the stable error code for scripted callers
    if let Some(CliError::Invalid { source, .. }) = err.downcast_ref::<CliError>() {
        eprintln!("\nCode: {}", source.code().yellow());
    }
}
