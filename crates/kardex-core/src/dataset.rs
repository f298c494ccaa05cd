//! Dataset — the full persisted state: field list plus ordered records.
//!
//! The serde shape of this type is the on-disk file format:
//!
//! ```json
//! {
//!   "fields": ["ID", "Name", "Value", "Category"],
//!   "records": [ { "ID": "...", "Name": "...", ... } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{record::Record, schema::Schema};

/// Schema field order plus records in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
  pub fields:  Vec<String>,
  pub records: Vec<Record>,
}

impl Dataset {
  /// An empty dataset carrying the schema's field order.
  pub fn empty(schema: &Schema) -> Self {
    Self { fields: schema.fields().to_vec(), records: Vec::new() }
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
