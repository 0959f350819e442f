//! Ledger domain models: the persisted record and its expense entries.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use expense::{Expense, DATE_FORMAT, TIME_FORMAT};
pub use ledger::Ledger;
