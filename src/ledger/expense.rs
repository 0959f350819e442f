use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Calendar date layout used for expense stamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Clock time layout used for expense stamps.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single spending entry. Immutable once appended to a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    category: String,
    amount: Decimal,
    date: String,
    time: String,
}

impl Expense {
    pub fn new(
        category: impl Into<String>,
        amount: Decimal,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
            time: time.into(),
        }
    }

    /// Builds an expense whose date and time columns are taken from `at`.
    pub fn stamped(category: impl Into<String>, amount: Decimal, at: NaiveDateTime) -> Self {
        Self::new(
            category,
            amount,
            at.format(DATE_FORMAT).to_string(),
            at.format(TIME_FORMAT).to_string(),
        )
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}
