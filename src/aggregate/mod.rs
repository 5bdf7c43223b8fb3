//! Pure aggregation over ledger snapshots.
//!
//! Everything here is stateless and deterministic: the same snapshot
//! always yields the same derived values, and nothing is cached.

use serde::Serialize;
use uuid::Uuid;

use crate::ledger::{Entry, Ledger};

/// Derived display totals for a ledger at a point in time.
///
/// `balance` is an exact same-unit subtraction; `savings_rate` already
/// carries the one-decimal display rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSnapshot {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings_rate: f64,
}

/// One entry's slice of a sequence breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryShare {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    /// Share of the sequence total, rounded to one decimal. `0.0` for
    /// every entry of a zero-total sequence.
    pub percentage: f64,
}

/// Sums the amounts of a sequence.
pub fn sequence_total(entries: &[Entry]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}

/// Computes the display totals for a ledger snapshot.
///
/// The savings rate is `(income - expenses) / income * 100` when income
/// is positive and `0.0` otherwise.
pub fn compute_aggregate(ledger: &Ledger) -> AggregateSnapshot {
    let total_income = sequence_total(&ledger.income);
    let total_expenses = sequence_total(&ledger.expenses);
    let savings_rate = if total_income > 0.0 {
        round1((total_income - total_expenses) / total_income * 100.0)
    } else {
        0.0
    };
    AggregateSnapshot {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        savings_rate,
    }
}

/// Computes each entry's percentage share of the sequence total.
///
/// A zero (or non-finite) total resolves every share to `0.0`; `NaN` and
/// `Infinity` never reach the output.
pub fn sequence_shares(entries: &[Entry]) -> Vec<EntryShare> {
    let total = sequence_total(entries);
    let divisible = total != 0.0 && total.is_finite();
    entries
        .iter()
        .map(|entry| EntryShare {
            id: entry.id,
            description: entry.description.clone(),
            amount: entry.amount,
            percentage: if divisible {
                round1(entry.amount / total * 100.0)
            } else {
                0.0
            },
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
