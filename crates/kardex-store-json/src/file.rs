//! [`FileBackend`] — whole-dataset load/save plus byte-for-byte duplication.
//!
//! The backend owns exclusive access to one backing path. `save` and
//! `copy_from` write through a sibling temporary file and rename it over the
//! backing path, so a crash mid-write never leaves a torn file observable.

use std::{
  fs,
  io::Write as _,
  path::{Path, PathBuf},
};

use kardex_core::{dataset::Dataset, schema::Schema};
use tracing::debug;

use crate::{Error, Result};

/// File I/O for a single backing path.
#[derive(Debug, Clone)]
pub struct FileBackend {
  path: PathBuf,
}

impl FileBackend {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path { &self.path }

  pub fn exists(&self) -> bool { self.path.exists() }

  /// Write an empty dataset with the given schema, if no backing file
  /// exists yet. A no-op otherwise.
  pub fn initialize(&self, schema: &Schema) -> Result<()> {
    if self.exists() {
      return Ok(());
    }
    debug!(path = %self.path.display(), "initialising empty dataset");
    self.save(&Dataset::empty(schema))
  }

  /// Read and parse the backing file.
  pub fn load(&self) -> Result<Dataset> {
    let bytes = fs::read(&self.path).map_err(|source| Error::Storage {
      path: self.path.clone(),
      source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| Error::Malformed {
      path: self.path.clone(),
      source,
    })
  }

  /// Serialize the full dataset and replace the backing file atomically.
  pub fn save(&self, dataset: &Dataset) -> Result<()> {
    let json =
      serde_json::to_vec_pretty(dataset).map_err(|source| Error::Malformed {
        path: self.path.clone(),
        source,
      })?;
    self.replace_with(&json)
  }

  /// Byte-for-byte copy of the backing file to `dest`.
  pub fn copy_to(&self, dest: &Path) -> Result<()> {
    fs::copy(&self.path, dest).map_err(|source| Error::Storage {
      path: dest.to_path_buf(),
      source,
    })?;
    debug!(dest = %dest.display(), "backed up dataset");
    Ok(())
  }

  /// Byte-for-byte copy of `src` over the backing file.
  pub fn copy_from(&self, src: &Path) -> Result<()> {
    let bytes = fs::read(src).map_err(|source| Error::Storage {
      path: src.to_path_buf(),
      source,
    })?;
    self.replace_with(&bytes)?;
    debug!(src = %src.display(), "restored dataset");
    Ok(())
  }

  /// Write `bytes` to a sibling tempfile, fsync, and rename it over the
  /// backing path.
  fn replace_with(&self, bytes: &[u8]) -> Result<()> {
    let storage_err = |source| Error::Storage { path: self.path.clone(), source };

    let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
      .map_err(storage_err)?;
    tmp.write_all(bytes).map_err(storage_err)?;
    tmp.as_file().sync_all().map_err(storage_err)?;
    tmp
      .persist(&self.path)
      .map_err(|e| storage_err(e.error))?;
    Ok(())
  }
}
