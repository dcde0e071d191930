use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::library::StorageResult;

/// Opens (creating if needed) the library database and applies migrations.
pub async fn init_db(db_url: &str) -> StorageResult<SqlitePool> {
    let db_path = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(SqliteConnectOptions::from_str(db_url)?.create_if_missing(true))
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Library database ready at {}", db_path);
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
pub async fn connect_in_memory() -> StorageResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
