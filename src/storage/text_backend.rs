use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{core::utils::ensure_dir, ledger::Ledger};

use super::{text_format, Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Flat-file store holding exactly one ledger.
#[derive(Debug, Clone)]
pub struct TextStorage {
    path: PathBuf,
}

impl TextStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for TextStorage {
    fn load(&self) -> Result<Ledger> {
        load_ledger_from_path(&self.path)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes the ledger by staging to a sibling temp file and renaming it into place.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let text = text_format::encode(ledger);
    let tmp = tmp_path(path);
    write_atomic(&tmp, &text)?;
    fs::rename(&tmp, path)?;
    debug!(
        path = %path.display(),
        expenses = ledger.expense_count(),
        "ledger saved"
    );
    Ok(())
}

pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger = text_format::decode(&data)?;
    debug!(
        path = %path.display(),
        expenses = ledger.expense_count(),
        "ledger loaded"
    );
    Ok(ledger)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
