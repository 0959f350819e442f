use rust_decimal::Decimal;

use crate::ledger::{Expense, Ledger};

/// Headline totals derived from a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_remaining: Decimal,
    pub handed_amount: Decimal,
}

/// One expense together with the balance left after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub category: String,
    pub amount: Decimal,
    pub date: String,
    pub time: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub summary: BudgetSummary,
    pub lines: Vec<StatementLine>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(ledger: &Ledger) -> BudgetSummary {
        let total_income = ledger.total_income();
        let total_expenses = ledger.total_expenses();
        BudgetSummary {
            total_income,
            total_expenses,
            net_remaining: total_income - total_expenses,
            handed_amount: ledger.handed_amount(),
        }
    }

    /// Running balance starts at the income and drops by each expense in stored order.
    pub fn statement(ledger: &Ledger) -> Statement {
        let mut balance = ledger.total_income();
        let lines = ledger
            .expenses()
            .iter()
            .map(|expense: &Expense| {
                balance = balance.saturating_sub(expense.amount());
                StatementLine {
                    category: expense.category().to_string(),
                    amount: expense.amount(),
                    date: expense.date().to_string(),
                    time: expense.time().to_string(),
                    balance,
                }
            })
            .collect();
        Statement {
            summary: Self::totals(ledger),
            lines,
        }
    }
}
