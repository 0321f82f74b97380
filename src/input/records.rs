use std::path::Path;

use anyhow::{bail, Context, Result};
use compact_str::CompactString;
use serde_json::Value;

use super::validate::{coerce_number, is_valid_item_record};
use crate::model::Item;

impl Item {
    /// Build an item from an untyped record, or `None` if the record fails
    /// [`is_valid_item_record`].
    pub fn from_record(record: &Value) -> Option<Item> {
        if !is_valid_item_record(record) {
            return None;
        }
        let name = match record.get("name")? {
            Value::String(s) => CompactString::new(s),
            other => CompactString::new(other.to_string()),
        };
        let weight = record.get("weight").and_then(coerce_number)?;
        let value = record.get("value").and_then(coerce_number)?;

        Some(Item {
            name,
            weight,
            value,
            is_dummy: false,
        })
    }
}

/// Parse a JSON array of records into items. Invalid records are skipped.
pub fn parse_items(text: &str) -> Result<Vec<Item>> {
    let doc: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    let Value::Array(records) = doc else {
        bail!("expected a JSON array of item records");
    };

    let mut items = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match Item::from_record(record) {
            Some(item) => items.push(item),
            None => tracing::warn!("Skipping invalid record [{}]: {}", i, record),
        }
    }

    tracing::info!(
        "Loaded {} items ({} records skipped)",
        items.len(),
        records.len() - items.len()
    );

    Ok(items)
}

/// Read and parse an item file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_items(&text).with_context(|| format!("failed to load items from {}", path.display()))
}
