//! Business logic for recording expenses against the available income.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::clock::Clock;
use crate::core::services::{ensure_non_negative, ServiceError, ServiceResult};
use crate::ledger::{Expense, Ledger};
use crate::storage::text_format::is_storable_category;

pub struct ExpenseService;

impl ExpenseService {
    /// Fails when expenses already consume all of the income.
    pub fn ensure_capacity(ledger: &Ledger) -> ServiceResult<()> {
        let spent = ledger.total_expenses();
        let income = ledger.total_income();
        if spent >= income {
            warn!(%spent, %income, "no income left for new expenses");
            return Err(ServiceError::IncomeExhausted { spent, income });
        }
        Ok(())
    }

    /// Trims and validates a category name.
    pub fn normalize_category(raw: &str) -> ServiceResult<String> {
        let category = raw.trim();
        if !is_storable_category(category) {
            return Err(ServiceError::InvalidCategory(category.to_string()));
        }
        Ok(category.to_string())
    }

    /// Appends an expense stamped with the clock's current time and returns it.
    /// The amount is also added to the handed amount.
    ///
    /// The ledger is left unchanged on any error.
    pub fn add(
        ledger: &mut Ledger,
        category: &str,
        amount: Decimal,
        clock: &dyn Clock,
    ) -> ServiceResult<Expense> {
        let category = Self::normalize_category(category)?;
        ensure_non_negative(amount)?;
        let remaining = ledger.net_remaining();
        if amount > remaining {
            warn!(%amount, %remaining, "expense would exceed income");
            return Err(ServiceError::ExceedsIncome { amount, remaining });
        }
        let expense = Expense::stamped(category, amount, clock.now());
        ledger
            .push_expense(expense.clone())
            .ok_or(ServiceError::AmountTooLarge(amount))?;
        debug!(category = expense.category(), %amount, "expense recorded");
        Ok(expense)
    }
}
