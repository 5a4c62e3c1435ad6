//! JSON file key-value store.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use timequiz_core::{KeyValueStore, QuizError};

/// A key-value store persisted as a single JSON object on disk.
///
/// Every write replaces the file atomically (write to a temporary file in the
/// same directory, then rename), so a crash never leaves a half-written file.
/// A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, creating its parent directory if needed.
    /// The file itself is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory: {}", parent.display())
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    "{} is not a valid store file, starting empty: {e}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut tmp, entries).context("failed to serialize store")?;
        tmp.write_all(b"\n").context("failed to write store")?;
        tmp.as_file().sync_all().context("failed to flush store")?;
        tmp.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "store written");
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut entries = self.read_entries()?;
        f(&mut entries);
        self.write_entries(&entries)
    }
}

fn unavailable(e: anyhow::Error) -> QuizError {
    QuizError::StorageUnavailable(format!("{e:#}"))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, QuizError> {
        let mut entries = self.read_entries().map_err(unavailable)?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), QuizError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .map_err(unavailable)
    }

    fn remove(&mut self, key: &str) -> Result<(), QuizError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
        .map_err(unavailable)
    }
}
