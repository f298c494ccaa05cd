//! [`JsonStore`] — the flat-file implementation of [`RecordStore`].

use std::path::{Path, PathBuf};

use kardex_core::{
  dataset::Dataset,
  index::KeyIndex,
  record::Record,
  schema::Schema,
  store::RecordStore,
};
use tracing::debug;

use crate::{Error, Result, file::FileBackend};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a single JSON file.
///
/// The store owns its backing path; callers receive the store instance
/// explicitly rather than sharing an ambient handle. The key index lives
/// only in memory and is rebuilt from the file after every mutation.
#[derive(Debug)]
pub struct JsonStore {
  schema:  Schema,
  backend: FileBackend,
  index:   KeyIndex,
}

impl JsonStore {
  /// Open a store at `path` with the given schema, creating an empty
  /// dataset file if none exists, and build the initial index.
  pub fn open(path: impl Into<PathBuf>, schema: Schema) -> Result<Self> {
    let backend = FileBackend::new(path);
    backend.initialize(&schema)?;

    let mut store =
      Self { schema, backend, index: KeyIndex::default() };
    store.reindex()?;
    Ok(store)
  }

  /// The backing file's path.
  pub fn path(&self) -> &Path { self.backend.path() }

  /// Rebuild the key index from the current file contents.
  fn reindex(&mut self) -> Result<()> {
    let dataset = self.backend.load()?;
    self.index.rebuild(&self.schema, &dataset);
    Ok(())
  }

  /// Persist `dataset` and rebuild the index from it — the tail of every
  /// mutating operation.
  fn commit(&mut self, dataset: &Dataset) -> Result<()> {
    self.backend.save(dataset)?;
    self.index.rebuild(&self.schema, dataset);
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for JsonStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn schema(&self) -> &Schema { &self.schema }

  fn dataset(&self) -> Result<Dataset> { self.backend.load() }

  fn search(&self, field: &str, value: &str) -> Result<Vec<Record>> {
    if !self.schema.contains(field) {
      return Err(kardex_core::Error::UnknownField(field.to_owned()).into());
    }

    let dataset = self.backend.load()?;

    // Key lookups go through the index; everything else is a scan.
    if field == self.schema.key_field() {
      let hit = self
        .index
        .lookup(value)
        .and_then(|pos| dataset.records.get(pos))
        .cloned();
      return Ok(hit.into_iter().collect());
    }

    Ok(
      dataset
        .records
        .iter()
        .filter(|r| r.get(field) == Some(value))
        .cloned()
        .collect(),
    )
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  fn add(&mut self, record: Record) -> Result<()> {
    record.validate(&self.schema)?;
    let key = record.key(&self.schema)?.to_owned();
    if self.index.contains(&key) {
      return Err(kardex_core::Error::DuplicateKey(key).into());
    }

    let mut dataset = self.backend.load()?;
    dataset.records.push(record);
    self.commit(&dataset)?;

    debug!(key = %key, len = dataset.len(), "added record");
    Ok(())
  }

  fn delete(&mut self, field: &str, value: &str) -> Result<usize> {
    if !self.schema.contains(field) {
      return Err(kardex_core::Error::UnknownField(field.to_owned()).into());
    }

    let mut dataset = self.backend.load()?;
    let before = dataset.len();
    dataset.records.retain(|r| r.get(field) != Some(value));
    let removed = before - dataset.len();

    // Zero matches is a no-op, but it still persists and reindexes.
    self.commit(&dataset)?;

    debug!(field, value, removed, "deleted records");
    Ok(removed)
  }

  fn edit(&mut self, key_value: &str, updated: Record) -> Result<()> {
    updated.validate(&self.schema)?;

    let pos = self.index.lookup(key_value).ok_or_else(|| {
      kardex_core::Error::RecordNotFound(key_value.to_owned())
    })?;

    // Changing the key during an edit would reindex the record under the
    // new value and could collide with an unrelated key; reject it.
    let new_key = updated.key(&self.schema)?;
    if new_key != key_value {
      return Err(
        kardex_core::Error::KeyChanged {
          expected: key_value.to_owned(),
          found:    new_key.to_owned(),
        }
        .into(),
      );
    }

    let mut dataset = self.backend.load()?;
    let slot = dataset.records.get_mut(pos).ok_or_else(|| {
      kardex_core::Error::RecordNotFound(key_value.to_owned())
    })?;
    *slot = updated;
    self.commit(&dataset)?;

    debug!(key = %key_value, pos, "edited record");
    Ok(())
  }

  fn clear(&mut self) -> Result<()> {
    let dataset = Dataset::empty(&self.schema);
    self.commit(&dataset)?;

    debug!("cleared dataset");
    Ok(())
  }

  // ── Backup / restore ──────────────────────────────────────────────────────

  fn backup(&self, dest: &Path) -> Result<()> {
    self.backend.copy_to(dest)
  }

  fn restore(&mut self, src: &Path) -> Result<()> {
    self.backend.copy_from(src)?;
    self.reindex()
  }
}
