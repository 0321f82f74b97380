use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single weighted leaf placed into a treemap row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name (empty for padding)
    pub name: CompactString,
    /// Drives sizing. Expected to be > 0.
    pub weight: f64,
    /// Opaque payload, carried through packing unchanged
    pub value: f64,
    /// Synthetic padding with no semantic value
    #[serde(default)]
    pub is_dummy: bool,
}

impl Item {
    pub fn new(name: &str, weight: f64, value: f64) -> Self {
        Self {
            name: CompactString::new(name),
            weight,
            value,
            is_dummy: false,
        }
    }

    /// Padding item that tops a row up by `weight`.
    pub fn dummy(weight: f64) -> Self {
        Self {
            name: CompactString::default(),
            weight,
            value: 0.0,
            is_dummy: true,
        }
    }
}

/// A bucket of items. `current_weight` always equals the sum of the item weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    items: Vec<Item>,
    current_weight: f64,
}

impl Row {
    /// Open a row holding just `item`.
    pub fn with_item(item: Item) -> Self {
        Self {
            current_weight: item.weight,
            items: vec![item],
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    /// Whether adding `weight` keeps this row within `limit`.
    pub fn fits(&self, weight: f64, limit: f64) -> bool {
        self.current_weight + weight <= limit
    }

    /// Append an item.
    pub fn push(&mut self, item: Item) {
        self.current_weight += item.weight;
        self.items.push(item);
    }

    /// Append a dummy covering the gap to `target`. Returns the padding weight,
    /// or `None` if the row already reaches the target.
    pub fn pad_to(&mut self, target: f64) -> Option<f64> {
        if self.current_weight < target {
            let diff = target - self.current_weight;
            self.items.push(Item::dummy(diff));
            // Pin to the target so rows compare equal even when `a + (b - a) != b`.
            self.current_weight = target;
            Some(diff)
        } else {
            None
        }
    }

    /// Number of real (non-padding) items.
    pub fn real_len(&self) -> usize {
        self.items.iter().filter(|i| !i.is_dummy).count()
    }
}

/// Result of packing: the final per-row target plus rows sorted heaviest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMap {
    pub weight_per_row: f64,
    pub rows: Vec<Row>,
}

impl TreeMap {
    /// Sum of all row weights (padding included).
    pub fn total_weight(&self) -> f64 {
        self.rows.iter().map(Row::current_weight).sum()
    }

    /// Iterate over every non-padding item, row by row.
    pub fn real_items(&self) -> impl Iterator<Item = &Item> {
        self.rows
            .iter()
            .flat_map(|r| r.items().iter())
            .filter(|i| !i.is_dummy)
    }
}
