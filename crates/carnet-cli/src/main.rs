//! `carnet` — command-line front end for the carnet contact list.
//!
//! # Usage
//!
//! ```text
//! carnet list
//! carnet add --name Durand --firstname Léa --birthdate 15/06/1994 \
//!            --email lea@example.fr --gender F
//! carnet edit lea@example.fr --phone 0612345678
//! carnet delete lea@example.fr
//! ```
//!
//! The database path comes from `--db`, then `store_path` in the config file
//! (`carnet.toml` by default), then `CARNET_STORE_PATH`, then `contacts.db`.

mod commands;

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::Context as _;
use carnet_store_sqlite::SqliteStore;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, EditArgs};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "carnet", version, about = "A personal contact list")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "carnet.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "PATH")]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every contact in storage order.
  List {
    /// Print a JSON array instead of text.
    #[arg(long)]
    json: bool,
  },
  /// Show every field of one contact.
  Show {
    email: String,
    #[arg(long)]
    json: bool,
  },
  /// Create a contact.
  Add(AddArgs),
  /// Edit the contact stored under an email.
  Edit(EditArgs),
  /// Delete the contact stored under an email.
  Delete { email: String },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Runtime settings, read from the config file and `CARNET_*` variables.
#[derive(Deserialize, Debug)]
struct Settings {
  store_path: PathBuf,
}

fn load_settings(path: &Path) -> anyhow::Result<Settings> {
  config::Config::builder()
    .set_default("store_path", "contacts.db")
    .context("failed to set config defaults")?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("CARNET"))
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("failed to deserialise Settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = load_settings(&cli.config)?;

  let store_path =
    expand_tilde(cli.db.as_deref().unwrap_or(settings.store_path.as_path()));
  let store = SqliteStore::open(&store_path)
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let code = match cli.command {
    Command::List { json } => commands::list(&store, json)?,
    Command::Show { email, json } => commands::show(&store, &email, json)?,
    Command::Add(args) => commands::add(&store, args),
    Command::Edit(args) => commands::edit(&store, args)?,
    Command::Delete { email } => commands::delete(&store, &email),
  };

  store.close().context("failed to close store")?;
  Ok(code)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
