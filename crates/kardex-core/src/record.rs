//! Record — a field-name → string-value mapping.
//!
//! A record carries no identity of its own; its key-field value is what the
//! store indexes. All values are plain strings, uncoerced and unvalidated
//! beyond schema shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, schema::Schema};

/// A single row of the dataset.
///
/// Valid for a schema iff it contains exactly the schema's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
  /// Build a record from field/value pairs.
  pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    Self(
      pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    )
  }

  /// Build a record by zipping `values` against the schema's field order.
  ///
  /// Fails with [`Error::SchemaMismatch`] if the value count differs from
  /// the schema's field count.
  pub fn from_values<V>(
    schema: &Schema,
    values: impl IntoIterator<Item = V>,
  ) -> Result<Self>
  where
    V: Into<String>,
  {
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    if values.len() != schema.fields().len() {
      return Err(Error::SchemaMismatch(format!(
        "expected {} values, got {}",
        schema.fields().len(),
        values.len()
      )));
    }
    Ok(Self(
      schema.fields().iter().cloned().zip(values).collect(),
    ))
  }

  /// The value of `field`, if present.
  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  /// Set a field value, replacing any previous one.
  pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
    self.0.insert(field.into(), value.into());
  }

  /// The value of the schema's key field.
  ///
  /// Fails with [`Error::SchemaMismatch`] if the field is absent — a record
  /// that passed [`Record::validate`] always has it.
  pub fn key<'a>(&'a self, schema: &Schema) -> Result<&'a str> {
    self.get(schema.key_field()).ok_or_else(|| {
      Error::SchemaMismatch(format!(
        "missing key field {:?}",
        schema.key_field()
      ))
    })
  }

  /// Check that this record contains exactly the schema's fields.
  pub fn validate(&self, schema: &Schema) -> Result<()> {
    for field in schema.fields() {
      if !self.0.contains_key(field) {
        return Err(Error::SchemaMismatch(format!("missing field {field:?}")));
      }
    }
    // All schema fields are present and unique, so a length mismatch can
    // only mean an extra field.
    if self.0.len() != schema.fields().len() {
      let extra = self
        .0
        .keys()
        .find(|k| !schema.contains(k.as_str()))
        .cloned()
        .unwrap_or_default();
      return Err(Error::SchemaMismatch(format!(
        "unexpected field {extra:?}"
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn schema() -> Schema {
    Schema::new(["ID", "Name"], "ID").unwrap()
  }

  #[test]
  fn from_values_zips_schema_order() {
    let record = Record::from_values(&schema(), ["1", "Alice"]).unwrap();
    assert_eq!(record.get("ID"), Some("1"));
    assert_eq!(record.get("Name"), Some("Alice"));
    assert_eq!(record.key(&schema()).unwrap(), "1");
  }

  #[test]
  fn from_values_rejects_wrong_arity() {
    let err = Record::from_values(&schema(), ["1"]).unwrap_err();
    assert!(matches!(err, Error::SchemaMismatch(_)));
  }

  #[test]
  fn validate_rejects_missing_field() {
    let record = Record::from_pairs([("ID", "1")]);
    let err = record.validate(&schema()).unwrap_err();
    assert!(matches!(err, Error::SchemaMismatch(m) if m.contains("Name")));
  }

  #[test]
  fn validate_rejects_extra_field() {
    let mut record = Record::from_values(&schema(), ["1", "Alice"]).unwrap();
    record.set("Shoe", "44");
    let err = record.validate(&schema()).unwrap_err();
    assert!(matches!(err, Error::SchemaMismatch(m) if m.contains("Shoe")));
  }
}
