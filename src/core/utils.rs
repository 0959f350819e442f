use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const LEDGER_FILE: &str = "budget_data.txt";
const CONFIG_FILE: &str = "config.json";

/// Overrides the application directory.
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";
/// Overrides the ledger file location, taking precedence over the config file.
pub const FILE_ENV: &str = "BUDGET_TRACKER_FILE";

/// Returns the application-specific data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default ledger file inside the given application directory.
pub fn ledger_file_in(base: &Path) -> PathBuf {
    base.join(LEDGER_FILE)
}

/// Configuration file inside the given application directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Ledger file named by the environment, if any.
pub fn ledger_file_override() -> Option<PathBuf> {
    env::var_os(FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn files_live_under_base_dir() {
        let base = Path::new("/data/budget");
        assert_eq!(ledger_file_in(base), base.join("budget_data.txt"));
        assert_eq!(config_file_in(base), base.join("config.json"));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = TempDir::new().expect("temp dir");
        let nested = temp.path().join("a/b");
        ensure_dir(&nested).expect("create");
        ensure_dir(&nested).expect("already exists");
        assert!(nested.is_dir());
        ensure_dir(Path::new("")).expect("empty path is a no-op");
    }
}
