pub mod expense_service;
pub mod income_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use income_service::IncomeService;
pub use summary_service::{BudgetSummary, Statement, StatementLine, SummaryService};

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
    #[error("Category `{0}` cannot contain commas or line breaks")]
    InvalidCategory(String),
    #[error("Current expenses ({spent:.2}) exceed or match your income ({income:.2}). Cannot add more expenses.")]
    IncomeExhausted { spent: Decimal, income: Decimal },
    #[error("Adding {amount:.2} would exceed your income; only {remaining:.2} remains.")]
    ExceedsIncome { amount: Decimal, remaining: Decimal },
    #[error("Amount {0} is too large for the ledger totals")]
    AmountTooLarge(Decimal),
}

/// Parses user-entered text into a non-negative amount.
pub fn parse_amount(raw: &str) -> ServiceResult<Decimal> {
    let trimmed = raw.trim();
    let amount =
        Decimal::from_str(trimmed).map_err(|_| ServiceError::InvalidAmount(trimmed.to_string()))?;
    ensure_non_negative(amount)?;
    Ok(amount)
}

fn ensure_non_negative(amount: Decimal) -> ServiceResult<()> {
    if amount < Decimal::ZERO {
        return Err(ServiceError::NegativeAmount(amount));
    }
    Ok(())
}
