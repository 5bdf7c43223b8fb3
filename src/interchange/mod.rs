//! Import/export of the ledger wire document.

pub mod document;
pub mod export;
pub mod import;

pub use document::{DocumentMetadata, LedgerDocument, EXPORT_CURRENCY, FORMAT_VERSION};
pub use export::{export_bundle, export_to_path, ExportBundle};
pub use import::{import_from_path, parse_document, ImportedDocument};
