#![allow(dead_code)]

use budget_tracker::{
    core::{
        services::{ExpenseService, IncomeService},
        FixedClock,
    },
    ledger::Ledger,
    storage::TextStorage,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Store backed by a fresh temp dir; keep the guard alive for the test's duration.
pub fn temp_storage() -> (TextStorage, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage = TextStorage::new(temp.path().join("budget_data.txt"));
    (storage, temp)
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .expect("valid date")
            .and_hms_opt(9, 41, 0)
            .expect("valid time"),
    )
}

pub fn dec(raw: &str) -> Decimal {
    raw.parse().expect("decimal literal")
}

/// Builds a ledger through the services so it satisfies every invariant.
pub fn ledger_with(income: &str, handed: bool, expenses: &[(&str, &str)]) -> Ledger {
    let mut ledger = Ledger::new();
    IncomeService::add(&mut ledger, dec(income), handed).expect("add income");
    for (category, amount) in expenses {
        ExpenseService::add(&mut ledger, category, dec(amount), &fixed_clock())
            .expect("add expense");
    }
    ledger
}
