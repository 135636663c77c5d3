//! Ads Document persistence with rolling backups.
//!
//! File layout inside the data directory:
//! - `{stem}.{ext}`: the current document
//! - `{stem}_backup_{YYYYMMDD_HHMMSS}.{ext}`: snapshots taken before each overwrite
//!
//! The timestamp is fixed-width and zero-padded, so sorting backup names
//! lexicographically sorts them by age.

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Format of the timestamp embedded in backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Error type for document operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owner of the document file and its backups.
pub struct DocumentStore {
    dir: PathBuf,
    path: PathBuf,
    stem: String,
    extension: Option<String>,
    max_backups: usize,
    // Saves are copy, prune, write; only one may run at a time.
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(data_dir: &Path, file_name: &str, max_backups: usize) -> Self {
        let file = Path::new(file_name);
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let extension = file.extension().map(|e| e.to_string_lossy().into_owned());

        Self {
            dir: data_dir.to_path_buf(),
            path: data_dir.join(file_name),
            stem,
            extension,
            max_backups,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the current document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and seed the document if it is missing.
    ///
    /// `seed` is a bundled copy of the document (e.g. shipped with the static
    /// files); it is copied only when the document does not exist yet.
    /// Returns true if the seed was copied.
    pub async fn init(&self, seed: Option<&Path>) -> Result<bool, StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let Some(seed) = seed else {
            return Ok(false);
        };
        if seed == self.path.as_path() || fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        if !fs::try_exists(seed).await? {
            return Ok(false);
        }

        fs::copy(seed, &self.path).await?;
        tracing::info!(from = %seed.display(), to = %self.path.display(), "Seeded document");
        Ok(true)
    }

    /// Read the current document as raw text.
    pub async fn load(&self) -> Result<String, StorageError> {
        Ok(fs::read_to_string(&self.path).await?)
    }

    /// Back up the current document, prune old backups, then replace it with `document`.
    ///
    /// Returns the path of the backup taken, if there was a document to back up.
    pub async fn save(
        &self,
        document: &serde_json::Value,
    ) -> Result<Option<PathBuf>, StorageError> {
        self.save_at(document, Local::now().naive_local()).await
    }

    /// [`save`](Self::save) with an explicit backup timestamp.
    pub async fn save_at(
        &self,
        document: &serde_json::Value,
        at: NaiveDateTime,
    ) -> Result<Option<PathBuf>, StorageError> {
        let content = serde_json::to_vec_pretty(document)?;

        let _guard = self.write_lock.lock().await;

        let backup = if fs::try_exists(&self.path).await? {
            let backup = self.backup_path(at);
            fs::copy(&self.path, &backup).await?;
            self.prune_backups().await?;
            Some(backup)
        } else {
            None
        };

        write_atomic(&self.path, &content).await?;

        Ok(backup)
    }

    /// Backup file path for a snapshot taken at `at`.
    pub fn backup_path(&self, at: NaiveDateTime) -> PathBuf {
        let mut name = format!("{}{}", self.backup_prefix(), at.format(BACKUP_TIMESTAMP_FORMAT));
        if let Some(ext) = &self.extension {
            name.push('.');
            name.push_str(ext);
        }
        self.dir.join(name)
    }

    /// Existing backups, oldest first.
    pub async fn list_backups(&self) -> Result<Vec<PathBuf>, StorageError> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if self.is_backup_name(&name) && entry.file_type().await?.is_file() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names.into_iter().map(|n| self.dir.join(n)).collect())
    }

    /// Delete all but the newest `max_backups` snapshots.
    async fn prune_backups(&self) -> Result<(), StorageError> {
        let backups = self.list_backups().await?;
        for old in expired(&backups, self.max_backups) {
            fs::remove_file(old).await?;
            tracing::debug!(path = %old.display(), "Removed old backup");
        }
        Ok(())
    }

    fn backup_prefix(&self) -> String {
        format!("{}_backup_", self.stem)
    }

    fn is_backup_name(&self, name: &str) -> bool {
        let Some(rest) = name.strip_prefix(&self.backup_prefix()) else {
            return false;
        };
        match &self.extension {
            Some(ext) => rest
                .strip_suffix(ext.as_str())
                .is_some_and(|r| r.ends_with('.')),
            None => !rest.contains('.'),
        }
    }
}

/// The entries of a sorted (oldest first) list that fall outside the newest `keep`.
fn expired<T>(sorted: &[T], keep: usize) -> &[T] {
    &sorted[..sorted.len().saturating_sub(keep)]
}

/// Write via a temp file and rename, so readers never see a partial document.
async fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let temp_path = temp_path(path);
    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;

    fs::rename(&temp_path, path).await?;
    Ok(())
}

/// `ads_data.json` -> `ads_data.json.tmp`; never the target itself.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
