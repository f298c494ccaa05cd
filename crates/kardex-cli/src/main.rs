//! `kardex` — command-line front-end for the kardex record store.
//!
//! A thin presentation layer: every subcommand maps onto exactly one public
//! store operation and renders its result.
//!
//! # Usage
//!
//! ```
//! kardex --store kardex.json init --fields ID,Name,Value,Category
//! kardex --store kardex.json add 1 Alice 42 misc
//! kardex --store kardex.json search Name Alice
//! kardex --store kardex.json backup snapshot.json
//! ```

mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use kardex_core::{record::Record, schema::Schema, store::RecordStore};
use kardex_store_json::{FileBackend, JsonStore};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "kardex", about = "Flat-file record store")]
struct Cli {
  /// Path to the backing JSON file.
  #[arg(long, env = "KARDEX_STORE", default_value = "kardex.json")]
  store: PathBuf,

  /// Key field; defaults to the first schema field.
  #[arg(long, env = "KARDEX_KEY")]
  key: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Create an empty store with the given schema.
  Init {
    /// Comma-separated field names, in display order.
    #[arg(long, value_delimiter = ',', required = true)]
    fields: Vec<String>,
  },
  /// Print the full table.
  List,
  /// Add a record; one value per schema field, in schema order.
  Add { values: Vec<String> },
  /// Print every record whose field exactly equals the value.
  Search { field: String, value: String },
  /// Delete every record whose field equals the value.
  Delete { field: String, value: String },
  /// Replace the record with the given key; one value per schema field.
  Edit { key: String, values: Vec<String> },
  /// Remove every record, keeping the schema.
  Clear {
    /// Confirm the destructive operation.
    #[arg(long)]
    yes: bool,
  },
  /// Copy the backing file to a destination path.
  Backup { dest: PathBuf },
  /// Overwrite the backing file from a backup.
  Restore { src: PathBuf },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if let Command::Init { fields } = &cli.command {
    let key = cli
      .key
      .clone()
      .or_else(|| fields.first().cloned())
      .context("schema has no fields")?;
    let schema = Schema::new(fields.clone(), key)?;
    JsonStore::open(&cli.store, schema)
      .with_context(|| format!("creating store at {}", cli.store.display()))?;
    println!("initialised {}", cli.store.display());
    return Ok(());
  }

  let mut store = open_store(&cli.store, cli.key.as_deref())?;
  let schema = store.schema().clone();

  match cli.command {
    Command::Init { .. } => unreachable!("handled above"),

    Command::List => {
      let dataset = store.dataset()?;
      table::print(&schema, &dataset.records);
    }

    Command::Add { values } => {
      let record = Record::from_values(&schema, values)?;
      store.add(record)?;
      println!("added 1 record");
    }

    Command::Search { field, value } => {
      let hits = store.search(&field, &value)?;
      println!("found {} record(s)", hits.len());
      if !hits.is_empty() {
        table::print(&schema, &hits);
      }
    }

    Command::Delete { field, value } => {
      let removed = store.delete(&field, &value)?;
      println!("deleted {removed} record(s)");
    }

    Command::Edit { key, values } => {
      let record = Record::from_values(&schema, values)?;
      store.edit(&key, record)?;
      println!("edited record {key:?}");
    }

    Command::Clear { yes } => {
      if !yes {
        bail!("refusing to clear the store without --yes");
      }
      store.clear()?;
      println!("cleared store");
    }

    Command::Backup { dest } => {
      store.backup(&dest)?;
      println!("backed up to {}", dest.display());
    }

    Command::Restore { src } => {
      store.restore(&src)?;
      println!("restored from {}", src.display());
    }
  }

  Ok(())
}

/// Open an existing store, deriving the schema from the backing file's field
/// list. The key field comes from `--key`, defaulting to the first field.
fn open_store(path: &Path, key: Option<&str>) -> Result<JsonStore> {
  let backend = FileBackend::new(path);
  if !backend.exists() {
    bail!(
      "no store at {} — create one with `kardex init`",
      path.display()
    );
  }

  let dataset = backend.load()?;
  let key = key
    .map(str::to_owned)
    .or_else(|| dataset.fields.first().cloned())
    .context("store file has no fields")?;
  let schema = Schema::new(dataset.fields, key)?;

  JsonStore::open(path, schema)
    .with_context(|| format!("opening store at {}", path.display()))
}
