//! Business logic for recording income.

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::services::{ensure_non_negative, ServiceError, ServiceResult};
use crate::ledger::Ledger;

pub struct IncomeService;

impl IncomeService {
    /// Adds `amount` to the income total, and to the handed amount when it was
    /// received directly.
    pub fn add(ledger: &mut Ledger, amount: Decimal, handed: bool) -> ServiceResult<()> {
        ensure_non_negative(amount)?;
        ledger
            .credit_income(amount, handed)
            .ok_or(ServiceError::AmountTooLarge(amount))?;
        debug!(%amount, handed, "income recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::parse_amount;

    #[test]
    fn handed_income_raises_both_totals() {
        let mut ledger = Ledger::new();
        IncomeService::add(&mut ledger, Decimal::new(200, 0), true).unwrap();
        IncomeService::add(&mut ledger, Decimal::new(50, 0), false).unwrap();
        assert_eq!(ledger.total_income(), Decimal::new(250, 0));
        assert_eq!(ledger.handed_amount(), Decimal::new(200, 0));
    }

    #[test]
    fn negative_income_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let err = IncomeService::add(&mut ledger, Decimal::new(-1, 0), true)
            .expect_err("negative income must fail");
        assert!(matches!(err, ServiceError::NegativeAmount(_)));
        assert_eq!(ledger, Ledger::new());
    }

    #[test]
    fn income_past_decimal_range_is_rejected() {
        let mut ledger = Ledger::new();
        let huge = parse_amount("79228162514264337593543950335").unwrap();
        IncomeService::add(&mut ledger, huge, true).unwrap();
        let before = ledger.clone();

        let err = IncomeService::add(&mut ledger, huge, false).expect_err("sum overflows");
        assert!(matches!(err, ServiceError::AmountTooLarge(amount) if amount == huge));
        assert_eq!(ledger, before);
    }
}
