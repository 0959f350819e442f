use crate::cli::formatters::format_amount;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{parse_amount, ExpenseService};
use crate::ledger::Ledger;

use super::{report_service_error, CommandResult, Outcome};

pub fn add_expense(context: &mut ShellContext, ledger: &mut Ledger) -> CommandResult {
    output::section("ADD EXPENSE");

    if let Err(err) = ExpenseService::ensure_capacity(ledger) {
        return report_service_error(err);
    }

    let Some(raw_category) = context.read_line("Enter the category of the expense")? else {
        return Ok(Outcome::Unchanged);
    };
    let category = match ExpenseService::normalize_category(&raw_category) {
        Ok(category) => category,
        Err(err) => return report_service_error(err),
    };

    let Some(raw_amount) = context.read_line("Enter the amount")? else {
        return Ok(Outcome::Unchanged);
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => return report_service_error(err),
    };

    match ExpenseService::add(ledger, &category, amount, context.clock()) {
        Ok(expense) => {
            output::success(format!(
                "Added Expense: {}, {} on {} at {}",
                expense.category(),
                format_amount(expense.amount()),
                expense.date(),
                expense.time()
            ));
            Ok(Outcome::Modified)
        }
        Err(err) => report_service_error(err),
    }
}
