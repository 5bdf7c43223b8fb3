use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Selects which of the two ledger sequences an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Income => f.write_str("income"),
            EntryKind::Expense => f.write_str("expense"),
        }
    }
}

/// A single income or expense line item.
///
/// The id gives an entry stable identity for notifications and display
/// keying. It is not part of the wire format; the mutation operations
/// address entries by their current position in the owning sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
}

impl Entry {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: normalize_amount(amount),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new("", 0.0)
    }
}

// Value equality covers the wire fields only; the generated id is
// session-local identity.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.amount == other.amount
    }
}

/// Clamps non-finite amounts to zero. Malformed numeric input is
/// normalized, never rejected.
pub(crate) fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces raw text from an amount edit box to a number, falling back to
/// zero for anything unparseable.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(normalize_amount)
        .unwrap_or(0.0)
}
