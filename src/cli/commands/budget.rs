use crate::cli::formatters::{render_overview, render_statement};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::core::services::SummaryService;
use crate::ledger::Ledger;

use super::{CommandResult, Outcome};

pub fn view_budget(_context: &mut ShellContext, ledger: &mut Ledger) -> CommandResult {
    let statement = SummaryService::statement(ledger);

    output::section("BUDGET OVERVIEW");
    output::info(render_overview(&statement.summary));

    output::section("STATEMENT");
    output::info(render_statement(&statement));

    Ok(Outcome::Unchanged)
}
