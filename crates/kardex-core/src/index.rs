//! KeyIndex — the volatile key-value → position map.
//!
//! The index is a pure derived cache over the dataset, never the source of
//! truth and never persisted. It is rebuilt in full after every mutation
//! rather than patched incrementally, so it cannot drift from the dataset.

use std::collections::HashMap;

use crate::{dataset::Dataset, schema::Schema};

/// Maps key-field values to record positions in the dataset sequence.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
  positions: HashMap<String, usize>,
}

impl KeyIndex {
  /// Recompute the full mapping in one pass over the dataset.
  ///
  /// Duplicate keys violate the store invariant and can only appear if the
  /// backing file was edited out-of-band; if they do, the last occurrence
  /// wins. Records missing the key field entirely are skipped.
  pub fn rebuild(&mut self, schema: &Schema, dataset: &Dataset) {
    self.positions.clear();
    for (pos, record) in dataset.records.iter().enumerate() {
      if let Some(key) = record.get(schema.key_field()) {
        self.positions.insert(key.to_owned(), pos);
      }
    }
  }

  /// The position of the record with this key, if present. O(1) amortized.
  pub fn lookup(&self, key: &str) -> Option<usize> {
    self.positions.get(key).copied()
  }

  pub fn contains(&self, key: &str) -> bool {
    self.positions.contains_key(key)
  }

  pub fn len(&self) -> usize { self.positions.len() }

  pub fn is_empty(&self) -> bool { self.positions.is_empty() }
}
