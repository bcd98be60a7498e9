//! Database access: connection bootstrap, repository ports, and the SQLite
//! implementations.

pub mod ports;
pub mod repositories;

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;

/// Open (creating if missing) the single-file catalog store at `path` and
/// bring its schema up to date.
///
/// Bootstrap is idempotent: an existing file is never recreated, and already
/// applied migrations are skipped.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    crate::MIGRATOR
        .run(&pool)
        .await
        .map_err(sqlx::Error::from)?;

    info!(path = %path.display(), "catalog store ready");
    Ok(pool)
}
