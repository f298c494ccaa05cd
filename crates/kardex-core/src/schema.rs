//! Schema — the fixed, ordered field list and its designated key field.
//!
//! The schema is decided once, when a store is created. One field is the key
//! field; its values must be unique across the dataset and are treated as
//! opaque string identifiers.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The shape of every record in a store.
///
/// Field order is significant — it is the on-disk and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
  fields: Vec<String>,
  key:    String,
}

impl Schema {
  /// Build a schema from an ordered field list and the key field.
  ///
  /// Fails if the field list is empty, contains a duplicate name, or does
  /// not contain the key field.
  pub fn new<I, S>(fields: I, key: impl Into<String>) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    let key = key.into();

    if fields.is_empty() {
      return Err(Error::EmptySchema);
    }
    for (i, field) in fields.iter().enumerate() {
      if fields[..i].contains(field) {
        return Err(Error::DuplicateField(field.clone()));
      }
    }
    if !fields.contains(&key) {
      return Err(Error::KeyFieldNotInSchema(key));
    }

    Ok(Self { fields, key })
  }

  /// The ordered field names.
  pub fn fields(&self) -> &[String] { &self.fields }

  /// The field whose values must be unique across the dataset.
  pub fn key_field(&self) -> &str { &self.key }

  /// Whether `field` is a member of this schema.
  pub fn contains(&self, field: &str) -> bool {
    self.fields.iter().any(|f| f == field)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_accepts_key_member() {
    let schema = Schema::new(["ID", "Name"], "ID").unwrap();
    assert_eq!(schema.fields(), ["ID", "Name"]);
    assert_eq!(schema.key_field(), "ID");
    assert!(schema.contains("Name"));
    assert!(!schema.contains("Missing"));
  }

  #[test]
  fn new_rejects_empty_field_list() {
    let err = Schema::new(Vec::<String>::new(), "ID").unwrap_err();
    assert!(matches!(err, Error::EmptySchema));
  }

  #[test]
  fn new_rejects_duplicate_field() {
    let err = Schema::new(["ID", "Name", "ID"], "ID").unwrap_err();
    assert!(matches!(err, Error::DuplicateField(f) if f == "ID"));
  }

  #[test]
  fn new_rejects_foreign_key_field() {
    let err = Schema::new(["ID", "Name"], "UID").unwrap_err();
    assert!(matches!(err, Error::KeyFieldNotInSchema(k) if k == "UID"));
  }
}
