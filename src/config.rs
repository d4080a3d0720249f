// src/config.rs
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub schema_path: String,
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub max_body_bytes: usize,
    /// Text extraction is disabled when unset.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "delivery_ledger.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 4,
            max_body_bytes: 10 * 1024 * 1024,
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("LEDGER_DB_PATH") {
            cfg.db_path = v;
        }
        if let Some(v) = get("LEDGER_SCHEMA_PATH") {
            cfg.schema_path = v;
        }
        if let Some(v) = get("LEDGER_ADDR") {
            cfg.addr = parse("LEDGER_ADDR", &v)?;
        }
        if let Some(v) = get("LEDGER_WORKERS") {
            cfg.max_workers = parse("LEDGER_WORKERS", &v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError::Invalid {
                    key: "LEDGER_WORKERS",
                    value: v,
                });
            }
        }
        if let Some(v) = get("LEDGER_MAX_BODY_BYTES") {
            cfg.max_body_bytes = parse("LEDGER_MAX_BODY_BYTES", &v)?;
        }
        cfg.gemini_api_key = get("GEMINI_API_KEY");
        if let Some(v) = get("GEMINI_MODEL") {
            cfg.gemini_model = v;
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
