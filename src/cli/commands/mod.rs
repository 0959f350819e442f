pub mod budget;
pub mod expense;
pub mod income;

use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::banner::MenuChoice;
use crate::core::services::ServiceError;
use crate::errors::CliError;
use crate::ledger::Ledger;

/// Whether a command changed the ledger and it must be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Modified,
}

pub type CommandResult = Result<Outcome, CliError>;

pub type CommandHandler = fn(&mut ShellContext, &mut Ledger) -> CommandResult;

/// Handler behind a menu entry; `Exit` has none.
pub fn handler_for(choice: MenuChoice) -> Option<CommandHandler> {
    match choice {
        MenuChoice::AddExpense => Some(expense::add_expense),
        MenuChoice::AddIncome => Some(income::add_income),
        MenuChoice::ViewBudget => Some(budget::view_budget),
        MenuChoice::Exit => None,
    }
}

/// Shows recoverable service errors to the user; storage failures keep propagating.
pub(crate) fn report_service_error(err: ServiceError) -> CommandResult {
    match err {
        ServiceError::Ledger(inner) => Err(inner.into()),
        other => {
            output::error(other);
            Ok(Outcome::Unchanged)
        }
    }
}
