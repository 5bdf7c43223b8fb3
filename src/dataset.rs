//! Bundled startup dataset.

use once_cell::sync::Lazy;

use crate::interchange::parse_document;
use crate::ledger::{Categories, Ledger};

static INITIAL_DATA: &str = include_str!("data/initial_data.json");

static INITIAL_LEDGER: Lazy<Ledger> = Lazy::new(|| {
    parse_document(INITIAL_DATA)
        .map(|document| document.into_ledger(&Categories::default()))
        .expect("bundled dataset is a valid interchange document")
});

/// Returns a fresh copy of the bundled default dataset.
///
/// Parsed once, through the same coercion path as any imported document.
pub fn initial_ledger() -> Ledger {
    INITIAL_LEDGER.clone()
}
