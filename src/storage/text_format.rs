//! Line-oriented codec for the ledger file.
//!
//! ```text
//! Income: 1500.00
//! Handed Amount: 500.00
//! Expenses:
//! Groceries,42.10,2024-05-01,18:22:05
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::{Expense, Ledger};

pub const INCOME_LABEL: &str = "Income:";
pub const HANDED_LABEL: &str = "Handed Amount:";
pub const EXPENSES_HEADER: &str = "Expenses:";

const FIELD_SEPARATOR: char = ',';
const EXPENSE_FIELDS: usize = 4;

/// Decode failures, each pointing at the offending 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: missing `{expected}` line")]
    MissingLine { line: usize, expected: &'static str },
    #[error("line {line}: expected `{expected}`, found `{found}`")]
    UnexpectedLine {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {line}: `{value}` is not a number")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: amount `{value}` is negative")]
    NegativeAmount { line: usize, value: Decimal },
    #[error("line {line}: expected 4 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: expense total exceeds the largest storable amount")]
    TotalOverflow { line: usize },
}

/// Serializes the ledger. Every line, including the last, ends with `\n`.
pub fn encode(ledger: &Ledger) -> String {
    let mut out = String::new();
    out.push_str(&format!("{INCOME_LABEL} {}\n", ledger.total_income()));
    out.push_str(&format!("{HANDED_LABEL} {}\n", ledger.handed_amount()));
    out.push_str(EXPENSES_HEADER);
    out.push('\n');
    for expense in ledger.expenses() {
        out.push_str(&encode_expense(expense));
        out.push('\n');
    }
    out
}

fn encode_expense(expense: &Expense) -> String {
    [
        expense.category().to_string(),
        expense.amount().to_string(),
        expense.date().to_string(),
        expense.time().to_string(),
    ]
    .join(",")
}

/// Parses the ledger file contents. Surrounding whitespace on each line is ignored.
pub fn decode(text: &str) -> Result<Ledger, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()));

    let total_income = decode_labeled(lines.next(), 1, INCOME_LABEL)?;
    let handed_amount = decode_labeled(lines.next(), 2, HANDED_LABEL)?;

    match lines.next() {
        Some((_, line)) if line == EXPENSES_HEADER => {}
        Some((line, found)) => {
            return Err(FormatError::UnexpectedLine {
                line,
                expected: EXPENSES_HEADER,
                found: found.to_string(),
            })
        }
        None => {
            return Err(FormatError::MissingLine {
                line: 3,
                expected: EXPENSES_HEADER,
            })
        }
    }

    let mut spent = Decimal::ZERO;
    let mut expenses = Vec::new();
    for (line, raw) in lines {
        let expense = decode_expense(line, raw)?;
        spent = spent
            .checked_add(expense.amount())
            .ok_or(FormatError::TotalOverflow { line })?;
        expenses.push(expense);
    }

    Ok(Ledger::from_parts(total_income, handed_amount, expenses))
}

fn decode_labeled(
    entry: Option<(usize, &str)>,
    line: usize,
    label: &'static str,
) -> Result<Decimal, FormatError> {
    let (line, raw) = entry.ok_or(FormatError::MissingLine {
        line,
        expected: label,
    })?;
    let value = raw
        .strip_prefix(label)
        .ok_or_else(|| FormatError::UnexpectedLine {
            line,
            expected: label,
            found: raw.to_string(),
        })?;
    decode_amount(line, value.trim())
}

fn decode_expense(line: usize, raw: &str) -> Result<Expense, FormatError> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    if fields.len() != EXPENSE_FIELDS {
        return Err(FormatError::FieldCount {
            line,
            found: fields.len(),
        });
    }
    let amount = decode_amount(line, fields[1].trim())?;
    Ok(Expense::new(fields[0], amount, fields[2], fields[3]))
}

fn decode_amount(line: usize, value: &str) -> Result<Decimal, FormatError> {
    let amount = Decimal::from_str(value).map_err(|_| FormatError::InvalidNumber {
        line,
        value: value.to_string(),
    })?;
    if amount < Decimal::ZERO {
        return Err(FormatError::NegativeAmount {
            line,
            value: amount,
        });
    }
    Ok(amount)
}

/// Whether a category can be written without corrupting the line layout.
pub fn is_storable_category(category: &str) -> bool {
    !category.contains([FIELD_SEPARATOR, '\n', '\r'])
}
