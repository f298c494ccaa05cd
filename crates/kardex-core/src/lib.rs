//! Core types and trait definitions for the kardex record store.
//!
//! This crate is deliberately free of file-system dependencies. Storage
//! backends (e.g. `kardex-store-json`) and front-ends depend on this
//! abstraction, not on any concrete backend.

pub mod dataset;
pub mod error;
pub mod index;
pub mod record;
pub mod schema;
pub mod store;

pub use error::{Error, Result};
