use std::path::Path;

use crate::aggregate::{self, AggregateSnapshot, EntryShare};
use crate::dataset;
use crate::errors::LedgerError;
use crate::interchange::{self, ExportBundle, ImportedDocument};
use crate::ledger::{EntryKind, Ledger, LedgerEvent};
use crate::time::{Clock, SystemClock};

/// Facade that owns the ledger and exposes the presentation boundary:
/// read access, the four mutation operations, aggregation, and
/// import/export.
///
/// Operations apply in invocation order on a single logical actor; the
/// ledger is process-local and lost on exit unless exported.
#[derive(Debug, Clone)]
pub struct Tracker {
    ledger: Ledger,
}

impl Tracker {
    /// Starts from the bundled default dataset.
    pub fn new() -> Self {
        Self {
            ledger: dataset::initial_ledger(),
        }
    }

    /// Starts from an empty ledger.
    pub fn empty() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    /// Starts from an existing ledger snapshot.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_entry(&mut self, kind: EntryKind) -> LedgerEvent {
        self.ledger.add_entry(kind)
    }

    pub fn remove_entry(
        &mut self,
        kind: EntryKind,
        index: usize,
    ) -> Result<Option<LedgerEvent>, LedgerError> {
        self.ledger.remove_entry(kind, index)
    }

    pub fn update_description(
        &mut self,
        kind: EntryKind,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.ledger.update_description(kind, index, text)
    }

    pub fn update_amount(
        &mut self,
        kind: EntryKind,
        index: usize,
        value: f64,
    ) -> Result<(), LedgerError> {
        self.ledger.update_amount(kind, index, value)
    }

    /// Derived display totals for the current ledger.
    pub fn aggregate(&self) -> AggregateSnapshot {
        aggregate::compute_aggregate(&self.ledger)
    }

    /// Per-entry percentage breakdown for one sequence.
    pub fn shares(&self, kind: EntryKind) -> Vec<EntryShare> {
        aggregate::sequence_shares(self.ledger.entries(kind))
    }

    /// Export stamped with the system clock.
    pub fn export(&self) -> Result<ExportBundle, LedgerError> {
        self.export_with_clock(&SystemClock)
    }

    pub fn export_with_clock(&self, clock: &dyn Clock) -> Result<ExportBundle, LedgerError> {
        interchange::export_bundle(&self.ledger, clock)
    }

    pub fn export_to_path(&self, path: &Path) -> Result<(), LedgerError> {
        interchange::export_to_path(&self.ledger, path, &SystemClock)
    }

    /// Imports interchange text, fully replacing the ledger on success
    /// and leaving it untouched on any failure. Categories fall back to
    /// the currently loaded ones when the document carries none.
    pub fn import(&mut self, text: &str) -> Result<(), LedgerError> {
        let document = interchange::parse_document(text)?;
        self.apply(document);
        Ok(())
    }

    /// Single-shot read-to-completion import from a file on disk.
    pub fn import_from_path(&mut self, path: &Path) -> Result<(), LedgerError> {
        let document = interchange::import_from_path(path)?;
        self.apply(document);
        Ok(())
    }

    fn apply(&mut self, document: ImportedDocument) {
        let ledger = document.into_ledger(&self.ledger.categories);
        tracing::info!(
            income = ledger.income.len(),
            expenses = ledger.expenses.len(),
            "ledger imported"
        );
        self.ledger.replace_all(ledger);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
