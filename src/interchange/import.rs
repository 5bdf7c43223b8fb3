use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::LedgerError;
use crate::ledger::{parse_amount, Categories, Entry, Ledger};

/// The outcome of parsing an interchange document: coerced entry
/// sequences plus the optional category metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
    pub categories: Option<Categories>,
}

impl ImportedDocument {
    /// Materializes a ledger, keeping `current` categories when the
    /// document carried none.
    pub fn into_ledger(self, current: &Categories) -> Ledger {
        let categories = self.categories.unwrap_or_else(|| current.clone());
        Ledger {
            income: self.income,
            expenses: self.expenses,
            categories,
        }
    }
}

/// Parses raw interchange text.
///
/// Fails with `MalformedJson` when the text is not JSON, and with
/// `InvalidShape` when the parsed document lacks `income`/`expenses`
/// sequences. Individual entries are coerced rather than rejected:
/// descriptions become text and amounts become finite numbers, so
/// malformed line items never reach aggregation.
pub fn parse_document(text: &str) -> Result<ImportedDocument, LedgerError> {
    let value: Value = serde_json::from_str(text).map_err(LedgerError::MalformedJson)?;
    let root = value
        .as_object()
        .ok_or(LedgerError::InvalidShape("document is not a JSON object"))?;
    let income = root
        .get("income")
        .ok_or(LedgerError::InvalidShape("missing `income` sequence"))?;
    let expenses = root
        .get("expenses")
        .ok_or(LedgerError::InvalidShape("missing `expenses` sequence"))?;
    let income = coerce_entries(income, "`income` is not a sequence")?;
    let expenses = coerce_entries(expenses, "`expenses` is not a sequence")?;
    let categories = root
        .get("metadata")
        .and_then(|metadata| metadata.get("categories"))
        .map(coerce_categories);
    tracing::debug!(
        income = income.len(),
        expenses = expenses.len(),
        has_categories = categories.is_some(),
        "interchange document parsed"
    );
    Ok(ImportedDocument {
        income,
        expenses,
        categories,
    })
}

/// Single-shot read-to-completion import from a file on disk.
pub fn import_from_path(path: &Path) -> Result<ImportedDocument, LedgerError> {
    let text = fs::read_to_string(path)?;
    parse_document(&text)
}

fn coerce_entries(value: &Value, shape: &'static str) -> Result<Vec<Entry>, LedgerError> {
    let items = value.as_array().ok_or(LedgerError::InvalidShape(shape))?;
    Ok(items.iter().map(coerce_entry).collect())
}

fn coerce_entry(value: &Value) -> Entry {
    let description = coerce_text(value.get("description"));
    let amount = coerce_amount(value.get("amount"));
    Entry::new(description, amount)
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

fn coerce_amount(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0),
        Some(Value::String(text)) => parse_amount(text),
        _ => 0.0,
    }
}

fn coerce_categories(value: &Value) -> Categories {
    Categories {
        income: coerce_labels(value.get("income")),
        expenses: coerce_labels(value.get("expenses")),
    }
}

fn coerce_labels(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|labels| {
            labels
                .iter()
                .filter_map(|label| match label {
                    Value::String(text) => Some(text.clone()),
                    Value::Number(number) => Some(number.to_string()),
                    Value::Bool(flag) => Some(flag.to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
