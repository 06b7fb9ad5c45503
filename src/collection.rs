use crate::models::{EntriesResponse, EntryItem, NumberRange, Snapshot};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Number(NumberRange),
    Amount,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(range) => write!(
                f,
                "Please enter a valid number between {} and {}",
                range.format(range.min),
                range.format(range.max)
            ),
            Self::Amount => write!(f, "Please enter a valid amount greater than 0"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Zero-filled snapshot covering every number in the range.
pub fn generate_numbers(range: NumberRange) -> Snapshot {
    let mut numbers = Snapshot::new();
    for value in range.min..=range.max {
        numbers.insert(range.format(value), 0.0);
    }
    numbers
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedAmount {
    pub numbers: Snapshot,
    pub number: String,
    pub amount: f64,
    pub new_total: f64,
}

/// Validate raw inputs and return a new snapshot with the amount added to the
/// matching entry. The input snapshot is never modified; a failed validation
/// produces no snapshot at all.
pub fn apply_amount(
    numbers: &Snapshot,
    range: NumberRange,
    number_input: &str,
    amount_input: &str,
) -> Result<AppliedAmount, ValidationError> {
    let value = number_input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::Number(range))?;
    if !range.contains(value) {
        return Err(ValidationError::Number(range));
    }

    let amount = amount_input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::Amount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::Amount);
    }

    let key = range.format(value as u32);
    let mut updated = numbers.clone();
    let total = updated.entry(key.clone()).or_insert(0.0);
    *total += amount;
    let new_total = *total;

    Ok(AppliedAmount {
        numbers: updated,
        number: key,
        amount,
        new_total,
    })
}

/// Read-side projection: active entries matching the search term, in
/// lexicographic key order, plus aggregates over the full snapshot.
pub fn project(numbers: &Snapshot, range: NumberRange, search: &str) -> EntriesResponse {
    let entries = numbers
        .iter()
        .filter(|(number, amount)| **amount > 0.0 && number.contains(search))
        .map(|(number, amount)| EntryItem {
            number: number.clone(),
            amount: *amount,
        })
        .collect();

    EntriesResponse {
        entries,
        active_count: numbers.values().filter(|amount| **amount > 0.0).count(),
        total_amount: numbers.values().sum(),
        available_count: range.size(),
    }
}
