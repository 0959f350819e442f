pub mod text_backend;
pub mod text_format;

use std::path::Path;

use tracing::info;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over the place a ledger is persisted.
pub trait StorageBackend {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn exists(&self) -> bool;
    fn path(&self) -> &Path;

    /// Loads the ledger, creating and persisting a zeroed one when none exists yet.
    fn load_or_init(&self) -> Result<Ledger> {
        if self.exists() {
            return self.load();
        }
        let ledger = Ledger::new();
        self.save(&ledger)?;
        info!(path = %self.path().display(), "initialized empty ledger");
        Ok(ledger)
    }
}

pub use text_backend::TextStorage;
pub use text_format::{decode, encode, FormatError};
