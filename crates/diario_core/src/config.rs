//! Runtime configuration shared by the CLI and FFI front ends.
//!
//! Resolution order for the database file: explicit path, then
//! `DIARIO_DB_PATH`, then `diario.sqlite3` in the system temp directory.

use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "DIARIO_DB_PATH";
pub const LOG_DIR_ENV: &str = "DIARIO_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "diario.sqlite3";

/// Resolves the database path; blank values are treated as unset.
pub fn resolve_db_path(explicit: Option<&str>) -> PathBuf {
    let from_env = std::env::var(DB_PATH_ENV).ok();
    resolve_db_path_from(explicit, from_env.as_deref())
}

fn resolve_db_path_from(explicit: Option<&str>, from_env: Option<&str>) -> PathBuf {
    [explicit, from_env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path_from, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn explicit_path_wins_over_env() {
        let path = resolve_db_path_from(Some("/data/a.db"), Some("/data/b.db"));
        assert_eq!(path, PathBuf::from("/data/a.db"));
    }

    #[test]
    fn blank_values_fall_through() {
        let path = resolve_db_path_from(Some("  "), Some(" /data/b.db "));
        assert_eq!(path, PathBuf::from("/data/b.db"));

        let fallback = resolve_db_path_from(None, Some(""));
        assert_eq!(fallback, std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
    }
}
