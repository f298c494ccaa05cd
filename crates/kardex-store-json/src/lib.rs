//! JSON flat-file backend for the kardex record store.
//!
//! The whole dataset lives in a single JSON file. Every mutation is a full
//! read-modify-write of that file followed by a key-index rebuild, so each
//! operation is durable before it returns.

mod store;

pub mod error;
pub mod file;

pub use error::{Error, Result};
pub use file::FileBackend;
pub use store::JsonStore;
