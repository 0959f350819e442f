use crate::{
    core::Clock,
    errors::CliError,
    ledger::Ledger,
    storage::StorageBackend,
};

use super::io::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a menu command needs: the ledger store, a clock, and where
/// answers come from.
pub struct ShellContext {
    pub running: bool,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    input: Box<dyn InputSource>,
}

impl ShellContext {
    pub fn new(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
        input: Box<dyn InputSource>,
    ) -> Self {
        Self {
            running: true,
            storage,
            clock,
            input,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.input.read_line(prompt)
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        self.input.confirm(prompt)
    }

    /// Reads the ledger fresh from the store, creating it on first use.
    pub fn load_ledger(&self) -> Result<Ledger, CliError> {
        Ok(self.storage.load_or_init()?)
    }

    pub fn persist(&self, ledger: &Ledger) -> Result<(), CliError> {
        Ok(self.storage.save(ledger)?)
    }
}
