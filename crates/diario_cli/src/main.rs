//! Command-line front end for the Diario store.
//!
//! Drives the same services as the mobile bridge, against the same
//! database file, so entries can be inspected or scripted from a shell.

use clap::Parser;
use diario_core::config::{DB_PATH_ENV, LOG_DIR_ENV};
use diario_core::db::open_db;
use diario_core::{default_log_level, init_logging, resolve_db_path, SqliteKvStore};
use rusqlite::TransactionBehavior;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "diario",
    version,
    about = "Emotion diary, task list and voice-memo log kept on this device."
)]
struct Args {
    /// Database file (falls back to the system temp directory)
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<String>,

    /// Directory for rolling log files; logging stays off when unset
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error; only meaningful with --log-dir
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    if !args.command.needs_storage() {
        return args.command.execute_offline();
    }

    let path = resolve_db_path(args.db.as_deref());
    let mut conn = open_db(&path)
        .map_err(|err| eyre::eyre!("cannot open diary database `{}`: {err}", path.display()))?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    args.command.execute(SqliteKvStore::new(&tx))?;
    tx.commit()?;
    Ok(())
}
