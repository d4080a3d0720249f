// src/db/store.rs
use std::collections::HashMap;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use thiserror::Error;

use crate::db::connection::Database;
use crate::errors::ServerError;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded writing '{key}' ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    #[error("storage query failed: {0}")]
    Query(String),
}

impl From<ServerError> for StoreError {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::DbError(msg) => StoreError::Query(msg),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Key -> string blob storage. Writes are synchronous; callers treat a
/// failed write as a warning, never as a reason to undo in-memory state.
pub trait BlobStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl BlobStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| {
            conn.query_row(
                "select value from blobs where key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("read '{key}' failed: {e}")))
        })
        .map_err(StoreError::from)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = Utc::now().timestamp();
        self.with_conn(|conn| {
            conn.execute(
                r#"
                insert into blobs (key, value, updated_at) values (?, ?, ?)
                on conflict(key) do update set value = excluded.value, updated_at = excluded.updated_at
                "#,
                params![key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("write '{key}' failed: {e}")))?;
            Ok(())
        })
        .map_err(StoreError::from)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute("delete from blobs where key = ?", params![key])
                .map_err(|e| ServerError::DbError(format!("remove '{key}' failed: {e}")))?;
            Ok(())
        })
        .map_err(StoreError::from)
    }
}

/// In-process store with an optional total byte capacity.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_bytes(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(limit),
        }
    }

    /// Bytes used by every entry except `key`.
    fn used_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.capacity {
            let needed = self.used_excluding(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
