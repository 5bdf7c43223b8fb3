//! Ledger domain model: entries, category metadata, and the positional
//! mutation operations.

pub mod entry;
pub mod event;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{parse_amount, Entry, EntryKind};
pub use event::LedgerEvent;
pub use ledger::{Categories, Ledger};
