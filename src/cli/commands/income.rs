use crate::cli::formatters::format_amount;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{parse_amount, IncomeService};
use crate::ledger::{Ledger, DATE_FORMAT, TIME_FORMAT};

use super::{report_service_error, CommandResult, Outcome};

pub fn add_income(context: &mut ShellContext, ledger: &mut Ledger) -> CommandResult {
    output::section("ADD INCOME");

    let Some(raw_amount) = context.read_line("Enter the amount of income")? else {
        return Ok(Outcome::Unchanged);
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => return report_service_error(err),
    };

    let Some(handed) = context.confirm("Was this income handed to you directly?")? else {
        return Ok(Outcome::Unchanged);
    };

    if let Err(err) = IncomeService::add(ledger, amount, handed) {
        return report_service_error(err);
    }

    let now = context.clock().now();
    output::success(format!(
        "Added Income: {} on {} at {}",
        format_amount(amount),
        now.format(DATE_FORMAT),
        now.format(TIME_FORMAT)
    ));
    Ok(Outcome::Modified)
}
