use crate::db::models::{Asset, NewAsset};
use crate::db::schema::SQLITE_INIT;
use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions};
use sqlx::{Connection, Pool, Sqlite};
use std::path::Path;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

fn open_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
}

/// One-shot schema bootstrap: open the database file at `path` (creating it
/// if absent), execute the bundled DDL, flush, and close.
///
/// The handle is released on every exit path, so a failed bootstrap leaves
/// no lock behind. Safe to re-run; the DDL guards against an existing table.
pub async fn ensure_schema(path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut conn = SqliteConnection::connect_with(&open_options(path))
        .await
        .map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

    match apply_schema(&mut conn).await {
        Ok(()) => {
            debug!(path = %path.display(), "schema declared");
            // close() flushes; a failure here means the change may not be durable
            conn.close()
                .await
                .map_err(|source| StorageError::CommitFailed {
                    path: path.to_path_buf(),
                    source,
                })
        }
        Err(source) => {
            let _ = conn.close().await;
            Err(StorageError::SchemaDeclarationFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Execute the bundled DDL statement by statement (SQLite accepts
/// multi-command strings but sqlx::query does not).
async fn apply_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Open a connection pool for the API service, creating the file if absent.
/// Call [`ensure_schema`] first; the pool assumes the table exists.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, StorageError> {
    let path = path.as_ref();
    SqlitePoolOptions::new()
        .connect_with(open_options(path))
        .await
        .map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })
}

/// Row access for the `asset` table.
#[derive(Clone)]
pub struct AssetStorage {
    pool: SqlitePool,
}

impl AssetStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new asset. Returns the id assigned by the engine.
    pub async fn insert(&self, asset: &NewAsset) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO asset (name, code, price, website, description)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(asset.name.as_str())
        .bind(asset.code.as_str())
        .bind(asset.price)
        .bind(asset.website.as_deref())
        .bind(asset.description.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list(&self) -> Result<Vec<Asset>, StorageError> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT id, name, code, price, website, description FROM asset ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Asset>, StorageError> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT id, name, code, price, website, description FROM asset WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset)
    }
}
