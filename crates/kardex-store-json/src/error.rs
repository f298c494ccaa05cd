//! Error type for `kardex-store-json`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the JSON backend.
///
/// [`Error::Storage`] and [`Error::Malformed`] together form the
/// storage-unavailable class: the backing file could not be read, written,
/// or parsed. Neither is retried; every failure is surfaced immediately.
#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] kardex_core::Error),

  #[error("storage unavailable at {}: {source}", path.display())]
  Storage {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed dataset file {}: {source}", path.display())]
  Malformed {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
