//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `kardex-store-json`).
//! Front-ends depend on this abstraction, not on any concrete backend.

use std::path::Path;

use crate::{dataset::Dataset, record::Record, schema::Schema};

/// Abstraction over a kardex record store backend.
///
/// Every mutating operation is self-contained: the backend loads the current
/// dataset, applies the change in memory, persists the full dataset, then
/// rebuilds its key index from the freshly written data. No operation
/// partially applies.
///
/// Operations are synchronous and blocking. Mutations take `&mut self`, so
/// exclusive access is enforced by the borrow checker; a deployment with
/// multiple callers must wrap the store in a lock that serializes mutations,
/// backup and restore alike.
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// The store's schema, fixed at creation time.
  fn schema(&self) -> &Schema;

  /// The full current dataset, in insertion order — the table view a
  /// front-end renders after every mutation.
  fn dataset(&self) -> Result<Dataset, Self::Error>;

  /// All records whose `field` exactly equals `value`, in dataset order.
  ///
  /// Single entry point, dual path: if `field` is the key field this is one
  /// index lookup returning at most one record; any other schema field
  /// degrades to a linear scan, since no secondary indices exist. A field
  /// outside the schema is an error.
  fn search(
    &self,
    field: &str,
    value: &str,
  ) -> Result<Vec<Record>, Self::Error>;

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Append a record, preserving insertion order.
  ///
  /// Fails with a duplicate-key error if the record's key value is already
  /// present (checked against the index before mutating), and with a
  /// schema-mismatch error if the record does not carry exactly the
  /// schema's fields. On failure the dataset is unchanged.
  fn add(&mut self, record: Record) -> Result<(), Self::Error>;

  /// Remove every record whose `field` equals `value` — a field-value
  /// predicate, not a keyed lookup. Returns the number of records removed.
  ///
  /// Removing zero matches is not an error; the dataset is still persisted
  /// and reindexed. A field outside the schema is an error.
  fn delete(
    &mut self,
    field: &str,
    value: &str,
  ) -> Result<usize, Self::Error>;

  /// Replace the record whose key is `key_value` with `updated`, in place —
  /// its position relative to other records is preserved.
  ///
  /// Fails with a record-not-found error if the key is absent. An `updated`
  /// record whose key field differs from `key_value` is rejected before any
  /// mutation; a key change would silently reindex the record under the new
  /// value and could collide with an unrelated key.
  fn edit(
    &mut self,
    key_value: &str,
    updated: Record,
  ) -> Result<(), Self::Error>;

  /// Replace the dataset with an empty record sequence, retaining the
  /// schema.
  fn clear(&mut self) -> Result<(), Self::Error>;

  // ── Backup / restore ──────────────────────────────────────────────────

  /// Byte-for-byte copy of the backing store to `dest`. Touches neither
  /// the dataset nor the index.
  fn backup(&self, dest: &Path) -> Result<(), Self::Error>;

  /// Byte-for-byte copy of `src` over the live backing store, then an index
  /// rebuild from the new contents.
  ///
  /// The restored file's schema is not validated; a mismatch surfaces later
  /// as missing-field errors.
  fn restore(&mut self, src: &Path) -> Result<(), Self::Error>;
}
