use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::storage::RetentionPolicy;

/// Application configuration loaded from environment variables.
/// Every key has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub upload_retention: RetentionPolicy,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb: usize = parse_env("MAX_UPLOAD_MB", 16)?;
        let max_upload_bytes = megabytes_to_bytes(max_upload_mb)?;

        Ok(Config {
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            upload_retention: parse_env("UPLOAD_RETENTION", RetentionPolicy::Keep)?,
            max_upload_bytes,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn megabytes_to_bytes(mb: usize) -> Result<usize> {
    mb.checked_mul(1024 * 1024)
        .with_context(|| format!("MAX_UPLOAD_MB={mb} is too large"))
}

#[cfg(test)]
impl Config {
    /// Configuration for router tests, rooted at a scratch upload directory.
    pub fn for_tests(upload_dir: PathBuf) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            upload_dir,
            upload_retention: RetentionPolicy::Keep,
            max_upload_bytes: 1024 * 1024,
        }
    }
}
