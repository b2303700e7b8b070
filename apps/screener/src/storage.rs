//! Upload store: the directory uploaded résumés are written to before
//! extraction.
//!
//! The store is opened once at startup and handed to handlers through
//! `AppState`. Saves are plain overwrites: two uploads that sanitize to the
//! same name share one file and the later write wins.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Name used when an upload's filename sanitizes to nothing.
pub const FALLBACK_FILENAME: &str = "resume.pdf";

/// What happens to files left in the store by earlier runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Never delete anything.
    #[default]
    Keep,
    /// Delete every regular file in the store when it is opened.
    PurgeOnStart,
}

#[derive(Debug, Error)]
#[error("unknown retention policy '{0}' (expected 'keep' or 'purge_on_start')")]
pub struct UnknownRetentionPolicy(String);

impl FromStr for RetentionPolicy {
    type Err = UnknownRetentionPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep" => Ok(RetentionPolicy::Keep),
            "purge_on_start" | "purge-on-start" => Ok(RetentionPolicy::PurgeOnStart),
            _ => Err(UnknownRetentionPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetentionPolicy::Keep => f.write_str("keep"),
            RetentionPolicy::PurgeOnStart => f.write_str("purge_on_start"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: Arc<PathBuf>,
}

impl UploadStore {
    /// Creates the directory if absent and applies the retention policy.
    pub async fn open(root: impl Into<PathBuf>, policy: RetentionPolicy) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        let store = UploadStore {
            root: Arc::new(root),
        };
        if policy == RetentionPolicy::PurgeOnStart {
            let removed = store.purge().await?;
            info!("Purged {removed} file(s) from {}", store.root().display());
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` under the sanitized form of `filename`, replacing any
    /// existing file of that name. Returns the sanitized name and full path.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<(String, PathBuf)> {
        let name = sanitize_filename(filename);
        let path = self.root.join(&name);
        tokio::fs::write(&path, bytes).await?;
        debug!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok((name, path))
    }

    /// Removes every regular file directly inside the store.
    pub async fn purge(&self) -> std::io::Result<usize> {
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(self.root.as_path()).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                tokio::fs::remove_file(entry.path()).await?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Reduces a client-supplied filename to a safe, flat ASCII name.
///
/// NFKD folds accented and compatibility letters to their ASCII base, the
/// remaining non-ASCII characters are dropped, `/` and `\` become spaces,
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed
/// and leading/trailing `.`/`_` are stripped.
pub fn sanitize_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("jane_doe-cv.pdf"), "jane_doe-cv.pdf");
    }

    #[test]
    fn test_sanitize_joins_whitespace() {
        assert_eq!(sanitize_filename("My  Resume 2024.pdf"), "My_Resume_2024.pdf");
    }

    #[test]
    fn test_sanitize_flattens_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename(r"C:\Users\me\cv.pdf"), "C_Users_me_cv.pdf");
    }

    #[test]
    fn test_sanitize_folds_accents_and_drops_symbols() {
        assert_eq!(sanitize_filename("résumé (final)!.pdf"), "resume_final.pdf");
        assert_eq!(sanitize_filename("José García.pdf"), "Jose_Garcia.pdf");
        assert_eq!(sanitize_filename("Ｆｕｌｌｗｉｄｔｈ.pdf"), "Fullwidth.pdf");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_filename(""), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("..."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("日本語"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_retention_policy_parses() {
        assert_eq!("keep".parse::<RetentionPolicy>().unwrap(), RetentionPolicy::Keep);
        assert_eq!(
            "PURGE_ON_START".parse::<RetentionPolicy>().unwrap(),
            RetentionPolicy::PurgeOnStart
        );
        assert!("sometimes".parse::<RetentionPolicy>().is_err());
    }

    #[tokio::test]
    async fn test_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("uploads");
        let store = UploadStore::open(&root, RetentionPolicy::Keep).await.unwrap();
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::open(dir.path(), RetentionPolicy::Keep).await.unwrap();

        let (name, path) = store.save("cv.pdf", b"first").await.unwrap();
        assert_eq!(name, "cv.pdf");
        let (_, again) = store.save("./cv.pdf", b"second").await.unwrap();

        assert_eq!(path, again);
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_keep_leaves_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("old.pdf"), b"old").unwrap();

        UploadStore::open(dir.path(), RetentionPolicy::Keep).await.unwrap();
        assert!(dir.path().join("old.pdf").exists());
    }

    #[tokio::test]
    async fn test_purge_on_start_removes_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("old.pdf"), b"old").unwrap();
        std::fs::write(dir.path().join("older.pdf"), b"older").unwrap();
        std::fs::create_dir(dir.path().join("keepme")).unwrap();

        UploadStore::open(dir.path(), RetentionPolicy::PurgeOnStart)
            .await
            .unwrap();

        assert!(!dir.path().join("old.pdf").exists());
        assert!(!dir.path().join("older.pdf").exists());
        assert!(dir.path().join("keepme").is_dir());
    }
}
