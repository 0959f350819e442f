use rust_decimal::Decimal;

use super::expense::Expense;

/// The persisted financial record.
///
/// Income and handed amount only ever grow and expenses are append-only; the
/// mutators are crate-private so that all changes go through the validating
/// services in [`crate::core::services`]. Mutators return `None` instead of
/// overflowing, leaving the ledger as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    total_income: Decimal,
    handed_amount: Decimal,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Creates a zeroed ledger, as written on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassembles a ledger from already-validated parts, e.g. a decoded file.
    pub fn from_parts(total_income: Decimal, handed_amount: Decimal, expenses: Vec<Expense>) -> Self {
        Self {
            total_income,
            handed_amount,
            expenses,
        }
    }

    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn handed_amount(&self) -> Decimal {
        self.handed_amount
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Sum of all expense amounts, capped at `Decimal::MAX`.
    ///
    /// Decoded and service-built ledgers never reach the cap.
    pub fn total_expenses(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |total, expense| total.saturating_add(expense.amount()))
    }

    pub fn net_remaining(&self) -> Decimal {
        self.total_income - self.total_expenses()
    }

    pub(crate) fn credit_income(&mut self, amount: Decimal, handed: bool) -> Option<()> {
        let total_income = self.total_income.checked_add(amount)?;
        let handed_amount = if handed {
            self.handed_amount.checked_add(amount)?
        } else {
            self.handed_amount
        };
        self.total_income = total_income;
        self.handed_amount = handed_amount;
        Some(())
    }

    /// Appends an expense; its amount is also counted as handed.
    pub(crate) fn push_expense(&mut self, expense: Expense) -> Option<()> {
        self.total_expenses().checked_add(expense.amount())?;
        let handed_amount = self.handed_amount.checked_add(expense.amount())?;
        self.handed_amount = handed_amount;
        self.expenses.push(expense);
        Some(())
    }
}
