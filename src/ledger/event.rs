use uuid::Uuid;

use super::entry::EntryKind;

/// Structured notification returned by ledger mutations.
///
/// The core reports what changed; the presentation layer decides how (or
/// whether) to surface it.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// A blank entry was appended to a sequence.
    EntryAdded { kind: EntryKind, id: Uuid },
    /// An entry with a positive amount was removed. Removals of
    /// zero-or-negative amounts produce no notification.
    EntryRemoved {
        kind: EntryKind,
        id: Uuid,
        description: String,
        amount: f64,
    },
}
