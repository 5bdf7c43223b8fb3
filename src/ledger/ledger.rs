use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::{
    entry::{normalize_amount, Entry, EntryKind},
    event::LedgerEvent,
};

/// Category labels carried through import/export as pass-through metadata.
///
/// Loaded from the initial dataset or an imported document; never computed
/// and never validated against the actual entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub income: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<String>,
}

/// The full collection of income and expense entries plus category
/// metadata. Owns all entries; both sequences are independently ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
    pub categories: Categories,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the sequence selected by `kind`.
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    /// Appends a blank entry to the sequence. Always succeeds.
    pub fn add_entry(&mut self, kind: EntryKind) -> LedgerEvent {
        let entry = Entry::default();
        let id = entry.id;
        self.entries_mut(kind).push(entry);
        tracing::debug!(%kind, "entry added");
        LedgerEvent::EntryAdded { kind, id }
    }

    /// Removes the entry at `index`, preserving the relative order of the
    /// remainder. Returns a notification only when the removed amount was
    /// positive.
    pub fn remove_entry(
        &mut self,
        kind: EntryKind,
        index: usize,
    ) -> Result<Option<LedgerEvent>, LedgerError> {
        let entries = self.entries_mut(kind);
        if index >= entries.len() {
            return Err(LedgerError::IndexOutOfRange {
                kind,
                index,
                len: entries.len(),
            });
        }
        let removed = entries.remove(index);
        tracing::debug!(%kind, index, amount = removed.amount, "entry removed");
        if removed.amount > 0.0 {
            Ok(Some(LedgerEvent::EntryRemoved {
                kind,
                id: removed.id,
                description: removed.description,
                amount: removed.amount,
            }))
        } else {
            Ok(None)
        }
    }

    /// Replaces the description of the entry at `index`.
    pub fn update_description(
        &mut self,
        kind: EntryKind,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let entry = self.entry_mut(kind, index)?;
        entry.description = text.into();
        Ok(())
    }

    /// Replaces the amount of the entry at `index`. Non-finite values are
    /// normalized to zero rather than rejected.
    pub fn update_amount(
        &mut self,
        kind: EntryKind,
        index: usize,
        value: f64,
    ) -> Result<(), LedgerError> {
        let entry = self.entry_mut(kind, index)?;
        entry.amount = normalize_amount(value);
        Ok(())
    }

    fn entry_mut(&mut self, kind: EntryKind, index: usize) -> Result<&mut Entry, LedgerError> {
        let entries = self.entries_mut(kind);
        let len = entries.len();
        entries
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { kind, index, len })
    }

    /// Atomic full replacement: both sequences and the category metadata
    /// swap together. Used by import; never applied partially.
    pub fn replace_all(&mut self, new: Ledger) {
        *self = new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        Ledger {
            income: vec![Entry::new("Salary", 2500.0), Entry::new("Bonus", 300.0)],
            expenses: vec![
                Entry::new("Rent", 900.0),
                Entry::new("Food", 250.0),
                Entry::new("Transport", 80.0),
            ],
            categories: Categories {
                income: vec!["Salary".into()],
                expenses: vec!["Housing".into(), "Food".into()],
            },
        }
    }

    #[test]
    fn add_entry_appends_a_blank_entry_and_reports_the_kind() {
        let mut ledger = sample_ledger();
        let event = ledger.add_entry(EntryKind::Income);
        assert_eq!(ledger.income.len(), 3);
        let appended = ledger.income.last().unwrap();
        assert_eq!(appended.description, "");
        assert_eq!(appended.amount, 0.0);
        assert_eq!(
            event,
            LedgerEvent::EntryAdded {
                kind: EntryKind::Income,
                id: appended.id,
            }
        );
    }

    #[test]
    fn remove_entry_preserves_relative_order() {
        let mut ledger = sample_ledger();
        let event = ledger
            .remove_entry(EntryKind::Expense, 1)
            .expect("index in range");
        assert_eq!(ledger.expenses.len(), 2);
        assert_eq!(ledger.expenses[0].description, "Rent");
        assert_eq!(ledger.expenses[1].description, "Transport");
        match event {
            Some(LedgerEvent::EntryRemoved {
                kind,
                description,
                amount,
                ..
            }) => {
                assert_eq!(kind, EntryKind::Expense);
                assert_eq!(description, "Food");
                assert_eq!(amount, 250.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn remove_entry_out_of_range_leaves_the_sequence_unchanged() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        let err = ledger
            .remove_entry(EntryKind::Income, 2)
            .expect_err("index past the end should fail");
        assert!(matches!(
            err,
            LedgerError::IndexOutOfRange {
                kind: EntryKind::Income,
                index: 2,
                len: 2,
            }
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn removing_a_zero_amount_entry_emits_no_notification() {
        let mut ledger = sample_ledger();
        ledger.add_entry(EntryKind::Expense);
        let event = ledger
            .remove_entry(EntryKind::Expense, 3)
            .expect("index in range");
        assert_eq!(event, None);
    }

    #[test]
    fn update_amount_normalizes_non_finite_input_to_zero() {
        let mut ledger = sample_ledger();
        ledger
            .update_amount(EntryKind::Income, 0, f64::NAN)
            .expect("index in range");
        assert_eq!(ledger.income[0].amount, 0.0);
        ledger
            .update_amount(EntryKind::Income, 0, 1234.5)
            .expect("index in range");
        assert_eq!(ledger.income[0].amount, 1234.5);
    }

    #[test]
    fn update_description_targets_the_entry_at_position() {
        let mut ledger = sample_ledger();
        ledger
            .update_description(EntryKind::Expense, 2, "Commute")
            .expect("index in range");
        assert_eq!(ledger.expenses[2].description, "Commute");

        let err = ledger
            .update_description(EntryKind::Expense, 9, "nope")
            .expect_err("index past the end should fail");
        assert!(matches!(err, LedgerError::IndexOutOfRange { index: 9, .. }));
    }

    #[test]
    fn replace_all_swaps_sequences_and_categories_together() {
        let mut ledger = sample_ledger();
        let replacement = Ledger {
            income: vec![Entry::new("Freelance", 1000.0)],
            expenses: Vec::new(),
            categories: Categories {
                income: vec!["Freelance".into()],
                expenses: Vec::new(),
            },
        };
        ledger.replace_all(replacement.clone());
        assert_eq!(ledger, replacement);
    }
}
