use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ledger::{Categories, Entry, Ledger};

/// Version string carried in exported documents. Import never rejects on
/// a mismatch; the field exists for forward compatibility.
pub const FORMAT_VERSION: &str = "1.0.0";

/// Display currency recorded in exported documents. The core assumes a
/// single implicit currency and performs no conversion.
pub const EXPORT_CURRENCY: &str = "EUR";

/// The persisted wire document. Field order and key names are part of the
/// round-trip contract with prior exports.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerDocument {
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub currency: String,
    /// Export wall-clock time, not data modification time.
    pub last_updated: DateTime<Utc>,
    pub version: String,
    pub categories: Categories,
}

impl LedgerDocument {
    /// Builds the wire document for a ledger snapshot, stamped with the
    /// provided export time.
    pub fn from_ledger(ledger: &Ledger, exported_at: DateTime<Utc>) -> Self {
        Self {
            income: ledger.income.clone(),
            expenses: ledger.expenses.clone(),
            metadata: DocumentMetadata {
                currency: EXPORT_CURRENCY.to_string(),
                last_updated: exported_at,
                version: FORMAT_VERSION.to_string(),
                categories: ledger.categories.clone(),
            },
        }
    }
}
