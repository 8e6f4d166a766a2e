use std::path::{Path, PathBuf};

use crate::migrations::run_pending;
use crate::state::{
    ensure_store_directory, map_sqlite_error, open_connection, resolve_store_home, store_db_path,
};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct StoreContext {
    pub home: PathBuf,
    pub db_path: PathBuf,
}

pub fn ensure_initialized() -> ClientResult<StoreContext> {
    ensure_initialized_with_home_override(None)
}

pub fn ensure_initialized_at(home_override: &Path) -> ClientResult<StoreContext> {
    ensure_initialized_with_home_override(Some(home_override))
}

fn ensure_initialized_with_home_override(
    home_override: Option<&Path>,
) -> ClientResult<StoreContext> {
    let home = resolve_store_home(home_override)?;
    ensure_store_directory(&home)?;

    let db_path = store_db_path(&home);
    let mut connection = open_connection(&db_path)?;
    run_pending(&mut connection).map_err(|error| match error {
        rusqlite_migration::Error::RusqliteError { query: _, err } => {
            map_sqlite_error(&db_path, &err)
        }
        other => ClientError::migration_failed(&db_path, &other.to_string()),
    })?;

    Ok(StoreContext { home, db_path })
}
