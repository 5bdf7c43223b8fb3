use thiserror::Error;

use crate::ledger::EntryKind;

/// Error type that captures the ledger and interchange failure modes.
///
/// None of these are fatal: import failures leave the ledger untouched
/// and are reported to the caller as values.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("Invalid document shape: {0}")]
    InvalidShape(&'static str),
    #[error("{kind} index {index} out of range (length {len})")]
    IndexOutOfRange {
        kind: EntryKind,
        index: usize,
        len: usize,
    },
}
