//! # fp-db-sqlite Implementation
//!
//! Bootstrap for the SQLite message log: one persistent connection and a
//! `messages` table that is created when absent. No message reads or writes
//! are defined here; the post controller never touches this store.

use std::str::FromStr;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use fp_core::traits::MessageStore;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tokio::sync::{Mutex, OnceCell};

const CREATE_MESSAGES: &str =
    "CREATE TABLE IF NOT EXISTS messages (id INTEGER PRIMARY KEY, content TEXT, sender TEXT, timestamp TEXT)";

static SHARED: OnceCell<SqliteMessageStore> = OnceCell::const_new();

pub struct SqliteMessageStore {
    /// `None` once closed
    conn: Mutex<Option<SqliteConnection>>,
}

impl SqliteMessageStore {
    /// Opens a connection (creating the database file if needed) and makes
    /// sure the message table exists.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url: {url}"))?
            .create_if_missing(true);
        let conn = options
            .connect()
            .await
            .with_context(|| format!("failed to open database: {url}"))?;

        let store = Self { conn: Mutex::new(Some(conn)) };
        store.ensure_schema().await?;
        info!("message store ready at {url}");
        Ok(store)
    }
}

/// Process-wide store. The first successful call wins; later calls return
/// the same store regardless of `url`.
pub async fn connect_shared(url: &str) -> anyhow::Result<&'static SqliteMessageStore> {
    SHARED.get_or_try_init(|| SqliteMessageStore::connect(url)).await
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(|| anyhow!("message store is closed"))?;

        sqlx::query(CREATE_MESSAGES)
            .execute(&mut *conn)
            .await
            .context("failed to create messages table")?;
        Ok(())
    }

    async fn close(&self) -> anyhow::Result<()> {
        let conn = self
            .conn
            .lock()
            .await
            .take()
            .ok_or_else(|| anyhow!("message store is already closed"))?;

        conn.close().await.context("failed to close message store")?;
        info!("message store closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    async fn columns(store: &SqliteMessageStore) -> Vec<(String, String, i64)> {
        let mut guard = store.conn.lock().await;
        let conn = guard.as_mut().unwrap();
        sqlx::query("SELECT name, type, pk FROM pragma_table_info('messages') ORDER BY cid")
            .fetch_all(&mut *conn)
            .await
            .unwrap()
            .into_iter()
            .map(|row| (row.get("name"), row.get("type"), row.get("pk")))
            .collect()
    }

    #[tokio::test]
    async fn test_connect_creates_messages_table() {
        let store = SqliteMessageStore::connect("sqlite::memory:").await.unwrap();

        assert_eq!(
            columns(&store).await,
            vec![
                ("id".to_string(), "INTEGER".to_string(), 1),
                ("content".to_string(), "TEXT".to_string(), 0),
                ("sender".to_string(), "TEXT".to_string(), 0),
                ("timestamp".to_string(), "TEXT".to_string(), 0),
            ]
        );
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = SqliteMessageStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(columns(&store).await.len(), 4);
    }

    #[tokio::test]
    async fn test_close_twice_is_an_error() {
        let store = SqliteMessageStore::connect("sqlite::memory:").await.unwrap();
        store.close().await.expect("first close succeeds");

        let err = store.close().await.unwrap_err();
        assert!(err.to_string().contains("already closed"));
        assert!(store.ensure_schema().await.is_err());
    }

    #[tokio::test]
    async fn test_connect_shared_returns_one_store() {
        let first = connect_shared("sqlite::memory:").await.unwrap();
        let second = connect_shared("sqlite::memory:").await.unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn test_connect_reports_bad_url() {
        assert!(SqliteMessageStore::connect("sqlite:/nonexistent-dir/feedpost/database.sqlite").await.is_err());
    }
}
