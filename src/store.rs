//! Storage handle: pool lifetime, schema bootstrap, and scoped sessions.

use crate::config::DatabaseSettings;
use crate::error::AppError;
use crate::service::ItemRepository;
use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, Sqlite, SqliteConnection, Transaction};
use std::str::FromStr;

/// DDL for every known entity. Each statement is idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER NOT NULL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_items_id ON items (id)",
    "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)",
];

/// Process-wide handle to the SQLite store. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the pool. File databases are created when missing.
    /// In-memory databases are pinned to one connection that is never recycled,
    /// since the database disappears once its last connection closes.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        let statement_level = if settings.echo {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        };
        let options = SqliteConnectOptions::from_str(&settings.url)?
            .create_if_missing(true)
            .log_statements(statement_level);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout);
        if settings.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        tracing::info!(url = %settings.url, "connected to database");
        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet. Must finish before serving traffic.
    pub async fn initialize(&self) -> Result<(), AppError> {
        for ddl in SCHEMA {
            tracing::debug!(sql = %ddl.trim(), "schema");
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        tracing::info!("database schema ready");
        Ok(())
    }

    /// Begin a unit of work on its own pooled connection.
    pub async fn open_session(&self) -> Result<Session, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Item repository bound to a fresh session.
    pub async fn items(&self) -> Result<ItemRepository, AppError> {
        Ok(ItemRepository::new(self.open_session().await?))
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// One unit of work. Dropping an uncommitted session rolls it back and
/// returns the connection to the pool, including when the request future is cancelled.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        let store = Store::connect(&DatabaseSettings::in_memory()).await.unwrap();
        store.initialize().await.unwrap();
        store
    }

    async fn count(store: &Store) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(store.pool())
            .await
            .unwrap();
        row.0
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let store = store().await;
        store.initialize().await.unwrap();
        store.ping().await.unwrap();
        assert_eq!(count(&store).await, 0);
    }

    #[tokio::test]
    async fn dropped_session_rolls_back() {
        let store = store().await;
        {
            let mut session = store.open_session().await.unwrap();
            sqlx::query("INSERT INTO items (name) VALUES ('milk')")
                .execute(session.connection())
                .await
                .unwrap();
        }
        assert_eq!(count(&store).await, 0);
    }

    #[tokio::test]
    async fn committed_session_is_visible() {
        let store = store().await;
        let mut session = store.open_session().await.unwrap();
        sqlx::query("INSERT INTO items (name) VALUES ('milk')")
            .execute(session.connection())
            .await
            .unwrap();
        session.commit().await.unwrap();
        assert_eq!(count(&store).await, 1);
    }
}
