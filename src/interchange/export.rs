use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::time::Clock;

use super::document::LedgerDocument;

const EXPORT_EXTENSION: &str = "json";
const FILE_STEM: &str = "financial-data";
const TMP_SUFFIX: &str = "tmp";

/// An export ready to hand to the presentation layer: the document text
/// plus the suggested download filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    pub contents: String,
    pub file_name: String,
}

/// Serializes the ledger into a pretty-printed interchange document
/// stamped with the clock's current time.
pub fn export_bundle(ledger: &Ledger, clock: &dyn Clock) -> Result<ExportBundle, LedgerError> {
    let now = clock.now();
    let document = LedgerDocument::from_ledger(ledger, now);
    let contents = serde_json::to_string_pretty(&document)?;
    let file_name = format!(
        "{}-{}.{}",
        FILE_STEM,
        now.format("%Y-%m-%d"),
        EXPORT_EXTENSION
    );
    tracing::debug!(%file_name, "export bundle prepared");
    Ok(ExportBundle {
        contents,
        file_name,
    })
}

/// Writes the export document to `path`.
///
/// The write goes through a temporary sibling file and a rename: on every
/// exit path the target holds either the old content or the new content,
/// never a partial document, and no temporary file is left behind on
/// success.
pub fn export_to_path(ledger: &Ledger, path: &Path, clock: &dyn Clock) -> Result<(), LedgerError> {
    let bundle = export_bundle(ledger, clock)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_all(&tmp, &bundle.contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
