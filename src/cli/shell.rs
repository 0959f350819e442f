use std::io;

use tracing::debug;

use crate::cli::commands::{self, Outcome};
use crate::cli::io::{PromptInput, ScriptInput};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::ui::banner::{Banner, MenuChoice};
use crate::config::ConfigManager;
use crate::core::SystemClock;
use crate::errors::CliError;
use crate::storage::{StorageBackend, TextStorage};

/// Set to any value to read answers line by line from stdin with plain output.
pub const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

const GOODBYE: &str = "Thank you for using Simple Budget Tracker. Goodbye!";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load_or_init()?;
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode || mode == CliMode::Script,
        high_contrast_mode: config.high_contrast_mode,
    });

    let storage = TextStorage::new(config_manager.ledger_path(&config));
    debug!(path = %storage.path().display(), ?mode, "starting shell");

    let mut context = match mode {
        CliMode::Interactive => ShellContext::new(
            Box::new(storage),
            Box::new(SystemClock),
            Box::new(PromptInput::new()),
        ),
        CliMode::Script => ShellContext::new(
            Box::new(storage),
            Box::new(SystemClock),
            Box::new(ScriptInput::new(io::stdin().lock())),
        ),
    };

    run_shell(&mut context)
}

/// Menu loop: each pass reloads the ledger, runs one command, and saves when it changed.
pub fn run_shell(context: &mut ShellContext) -> Result<(), CliError> {
    // Fail fast on a malformed file before showing the menu.
    context.load_ledger()?;

    while context.running {
        output::info(Banner::text());
        let Some(line) = context.read_line("Enter your choice")? else {
            output::info(GOODBYE);
            break;
        };

        let mut ledger = context.load_ledger()?;
        let Some(choice) = MenuChoice::parse(&line) else {
            output::warning("Invalid choice. Try again.");
            continue;
        };

        match commands::handler_for(choice) {
            Some(handler) => {
                if handler(context, &mut ledger)? == Outcome::Modified {
                    context.persist(&ledger)?;
                }
            }
            None => {
                output::info(GOODBYE);
                context.running = false;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::errors::LedgerError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn context_for(path: &Path, script: &str) -> ShellContext {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 2, 29)
                .unwrap()
                .and_hms_opt(18, 0, 5)
                .unwrap(),
        );
        ShellContext::new(
            Box::new(TextStorage::new(path)),
            Box::new(clock),
            Box::new(ScriptInput::new(Cursor::new(script.to_string()))),
        )
    }

    #[test]
    fn income_then_expense_is_persisted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("budget_data.txt");
        let mut context = context_for(&path, "2\n500\nyes\n1\nFood\n120.25\n3\n4\n");

        run_shell(&mut context).unwrap();

        assert!(!context.running);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Income: 500\nHanded Amount: 620.25\nExpenses:\nFood,120.25,2024-02-29,18:00:05\n"
        );
    }

    #[test]
    fn rejected_expense_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("budget_data.txt");
        let mut context = context_for(&path, "2\n50\nno\n1\nRent\n75\n1\nRent\nabc\n");

        run_shell(&mut context).unwrap();

        let ledger = context.storage().load().unwrap();
        assert_eq!(ledger.total_income(), Decimal::new(50, 0));
        assert_eq!(ledger.handed_amount(), Decimal::ZERO);
        assert_eq!(ledger.expense_count(), 0);
    }

    #[test]
    fn invalid_choices_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("budget_data.txt");
        let mut context = context_for(&path, "9\nhello\n\n4\n");
        run_shell(&mut context).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Income: 0\nHanded Amount: 0\nExpenses:\n"
        );
    }

    #[test]
    fn malformed_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("budget_data.txt");
        fs::write(&path, "Income: abc\n").unwrap();
        let mut context = context_for(&path, "3\n4\n");

        let err = run_shell(&mut context).expect_err("malformed file must abort");
        assert!(matches!(err, CliError::Ledger(LedgerError::Format(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Income: abc\n");
    }
}
