//! Text rendering for the budget overview and the statement table.

use rust_decimal::Decimal;

use crate::cli::ui::table_renderer::{Alignment, Table, TableColumn};
use crate::core::services::{BudgetSummary, Statement};

const LABEL_WIDTH: usize = 25;
const PLACEHOLDER: &str = "---";

pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

pub fn render_overview(summary: &BudgetSummary) -> String {
    [
        ("Total Income:", summary.total_income),
        ("Total Expenses:", summary.total_expenses),
        ("Net Remaining Budget:", summary.net_remaining),
        ("Handed Amount:", summary.handed_amount),
    ]
    .iter()
    .map(|(label, value)| format!("{:<width$} {}", label, format_amount(*value), width = LABEL_WIDTH))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_statement(statement: &Statement) -> String {
    let income = format_amount(statement.summary.total_income);
    let mut rows = vec![vec![
        "Income".to_string(),
        income.clone(),
        "Income".to_string(),
        PLACEHOLDER.to_string(),
        PLACEHOLDER.to_string(),
        income,
    ]];
    rows.extend(statement.lines.iter().map(|line| {
        vec![
            line.category.clone(),
            format_amount(line.amount),
            "Expense".to_string(),
            line.date.clone(),
            line.time.clone(),
            format_amount(line.balance),
        ]
    }));

    let table = Table {
        columns: statement_columns(),
        rows,
        footer: Some(vec![
            "Total Expenses:".to_string(),
            format_amount(statement.summary.total_expenses),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            format_amount(statement.summary.net_remaining),
        ]),
        padding: 0,
    };
    table.render()
}

fn statement_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Category", 20, Alignment::Left),
        TableColumn::new("Amount", 10, Alignment::Right),
        TableColumn::new("Type", 9, Alignment::Center),
        TableColumn::new("Date", 10, Alignment::Left),
        TableColumn::new("Time", 8, Alignment::Left),
        TableColumn::new("Remaining Balance", 0, Alignment::Right),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::ledger::{Expense, Ledger};

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_parts(
            dec("1000"),
            dec("300"),
            vec![
                Expense::new("Rent", dec("600"), "2024-01-01", "09:00:00"),
                Expense::new("Food", dec("20.5"), "2024-01-02", "13:45:10"),
            ],
        )
    }

    #[test]
    fn overview_lists_totals_with_two_decimals() {
        let overview = render_overview(&SummaryService::totals(&sample_ledger()));
        let lines: Vec<&str> = overview.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("{:<25} 1000.00", "Total Income:"));
        assert_eq!(lines[1], format!("{:<25} 620.50", "Total Expenses:"));
        assert_eq!(lines[2], format!("{:<25} 379.50", "Net Remaining Budget:"));
        assert_eq!(lines[3], format!("{:<25} 300.00", "Handed Amount:"));
    }

    #[test]
    fn statement_shows_running_balance_per_expense() {
        let rendered = render_statement(&SummaryService::statement(&sample_ledger()));
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Category"));
        assert!(lines[0].ends_with("Remaining Balance"));

        let income = lines.iter().find(|l| l.starts_with("Income")).unwrap();
        assert!(income.ends_with("1000.00"));

        let rent = lines.iter().find(|l| l.starts_with("Rent")).unwrap();
        assert!(rent.contains("Expense"));
        assert!(rent.contains("2024-01-01"));
        assert!(rent.ends_with("400.00"), "got: {rent}");

        let food = lines.iter().find(|l| l.starts_with("Food")).unwrap();
        assert!(food.contains("20.50"));
        assert!(food.ends_with("379.50"), "got: {food}");

        let footer = lines.last().unwrap();
        assert!(footer.starts_with("Total Expenses:"));
        assert!(footer.contains("620.50"));
        assert!(footer.ends_with("379.50"));
    }

    #[test]
    fn long_categories_are_printed_in_full() {
        let category = "Quarterly car insurance premium and roadside cover";
        let ledger = Ledger::from_parts(
            dec("500"),
            dec("0"),
            vec![Expense::new(category, dec("120"), "2024-03-01", "10:00:00")],
        );
        let rendered = render_statement(&SummaryService::statement(&ledger));
        assert!(rendered.contains(category), "got:\n{rendered}");
        assert!(!rendered.contains('…'));
    }

    #[test]
    fn empty_statement_still_shows_income_and_totals() {
        let rendered = render_statement(&SummaryService::statement(&Ledger::new()));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("Income"));
        assert!(lines[4].ends_with("0.00"));
    }
}
