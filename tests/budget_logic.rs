mod common;

use budget_tracker::core::services::{
    parse_amount, ExpenseService, IncomeService, ServiceError, SummaryService,
};
use common::{dec, fixed_clock, ledger_with};
use rust_decimal::Decimal;

#[test]
fn adding_expense_moves_totals_by_exactly_its_amount() {
    let mut ledger = ledger_with("800", false, &[("Rent", "450.10")]);
    let before = SummaryService::totals(&ledger);

    for amount in ["0", "0.01", "12.34", "100"] {
        let previous = SummaryService::totals(&ledger);
        ExpenseService::add(&mut ledger, "Misc", dec(amount), &fixed_clock()).unwrap();
        let after = SummaryService::totals(&ledger);
        assert_eq!(after.total_expenses - previous.total_expenses, dec(amount));
        assert_eq!(previous.net_remaining - after.net_remaining, dec(amount));
        assert_eq!(after.total_income, before.total_income);
    }
}

#[test]
fn over_income_expense_is_rejected_without_change() {
    let mut ledger = ledger_with("300", true, &[("Rent", "250")]);
    let snapshot = ledger.clone();

    let err = ExpenseService::add(&mut ledger, "Trip", dec("50.01"), &fixed_clock())
        .expect_err("must exceed income");
    assert!(matches!(err, ServiceError::ExceedsIncome { .. }));
    assert_eq!(ledger, snapshot);

    ExpenseService::add(&mut ledger, "Trip", dec("50"), &fixed_clock())
        .expect("exactly the remaining income fits");
    assert!(matches!(
        ExpenseService::ensure_capacity(&ledger),
        Err(ServiceError::IncomeExhausted { .. })
    ));
}

#[test]
fn income_and_handed_amount_never_decrease() {
    let mut ledger = ledger_with("0", false, &[]);
    let mut last = SummaryService::totals(&ledger);
    for (amount, handed) in [("10", true), ("0", false), ("5.5", false), ("7", true)] {
        IncomeService::add(&mut ledger, dec(amount), handed).unwrap();
        ExpenseService::add(&mut ledger, "Snack", dec("1"), &fixed_clock()).unwrap();
        let now = SummaryService::totals(&ledger);
        assert!(now.total_income >= last.total_income);
        assert!(now.handed_amount >= last.handed_amount);
        last = now;
    }
    assert_eq!(last.total_income, dec("22.5"));
    // 17 handed as income plus the four 1.00 expenses.
    assert_eq!(last.handed_amount, dec("21"));
}

#[test]
fn expense_raises_handed_amount_by_its_amount() {
    let mut ledger = ledger_with("100", false, &[]);
    ExpenseService::add(&mut ledger, "Groceries", dec("30"), &fixed_clock()).unwrap();
    assert_eq!(ledger.handed_amount(), dec("30"));

    let mut ledger = ledger_with("1000", true, &[]);
    ExpenseService::add(&mut ledger, "Food", dec("120.25"), &fixed_clock()).unwrap();
    assert_eq!(ledger.handed_amount(), dec("1120.25"));
}

#[test]
fn amounts_past_decimal_range_are_reported_not_panicked() {
    let huge = parse_amount("79228162514264337593543950335").unwrap();
    let mut ledger = ledger_with("0", false, &[]);
    IncomeService::add(&mut ledger, huge, false).unwrap();
    let snapshot = ledger.clone();

    let err = IncomeService::add(&mut ledger, huge, false).expect_err("income overflows");
    assert!(matches!(err, ServiceError::AmountTooLarge(_)));
    assert_eq!(ledger, snapshot);

    IncomeService::add(&mut ledger, Decimal::ZERO, false).unwrap();
    let totals = SummaryService::totals(&ledger);
    assert_eq!(totals.total_income, Decimal::MAX);
    assert_eq!(totals.net_remaining, Decimal::MAX);
}

#[test]
fn statement_balance_tracks_stored_order() {
    let ledger = ledger_with("100", false, &[("A", "10"), ("B", "20"), ("C", "30")]);
    let statement = SummaryService::statement(&ledger);
    let rows: Vec<(&str, String)> = statement
        .lines
        .iter()
        .map(|line| (line.category.as_str(), line.balance.to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("A", "90".to_string()),
            ("B", "70".to_string()),
            ("C", "40".to_string())
        ]
    );
    assert_eq!(statement.summary.net_remaining, dec("40"));
}
