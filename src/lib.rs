#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the ledger, aggregation, and import/export
//! primitives that power a single-page personal finance tracker UI.

pub mod aggregate;
pub mod dataset;
pub mod errors;
pub mod interchange;
pub mod ledger;
pub mod time;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}

pub use aggregate::{
    compute_aggregate, sequence_shares, sequence_total, AggregateSnapshot, EntryShare,
};
pub use errors::LedgerError;
pub use interchange::{
    DocumentMetadata, ExportBundle, ImportedDocument, LedgerDocument, EXPORT_CURRENCY,
    FORMAT_VERSION,
};
pub use ledger::{parse_amount, Categories, Entry, EntryKind, Ledger, LedgerEvent};
pub use time::{Clock, SystemClock};
pub use tracker::Tracker;
