use thiserror::Error;

use crate::storage::FormatError;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed ledger file: {0}")]
    Format(#[from] FormatError),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// User-facing CLI error wrapper. Anything reaching `main` ends the program.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
