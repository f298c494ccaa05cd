//! Error types for `kardex-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate key: {0:?}")]
  DuplicateKey(String),

  #[error("record not found: {0:?}")]
  RecordNotFound(String),

  #[error("edit may not change the key field (expected {expected:?}, found {found:?})")]
  KeyChanged { expected: String, found: String },

  #[error("field not in schema: {0:?}")]
  UnknownField(String),

  #[error("record does not match schema: {0}")]
  SchemaMismatch(String),

  #[error("schema has no fields")]
  EmptySchema,

  #[error("duplicate schema field: {0:?}")]
  DuplicateField(String),

  #[error("key field {0:?} is not in the schema")]
  KeyFieldNotInSchema(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
