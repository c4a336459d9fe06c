//! Issue store persistence.
//!
//! On disk the store is one flat JSON object: criterion ids map to counts and
//! the reserved `last` key holds the most recently added id (or `null`). In
//! memory the two concerns are kept apart in [`IssueStore`].

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Failures while reading or writing the issue store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read issue store {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("issue store {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write issue store {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-criterion issue counts plus the single-step undo marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStore {
    /// Most recently added criterion id, cleared once its count hits zero.
    #[serde(rename = "last", default)]
    pub last_added: Option<String>,
    /// Occurrence count per criterion id. Zero counts are never stored.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

impl IssueStore {
    /// Records one more occurrence of `id` and marks it as last added.
    pub fn add(&mut self, id: &str) -> u64 {
        let count = self.counts.entry(id.to_string()).or_insert(0);
        *count += 1;
        self.last_added = Some(id.to_string());
        *count
    }

    /// Reverts one occurrence of the last added id.
    ///
    /// Returns the id that was decremented, or `None` if there is nothing to
    /// undo. The marker is only cleared when the count reaches zero, so a
    /// repeated undo keeps decrementing the same id until it is gone.
    pub fn undo_last(&mut self) -> Option<String> {
        let id = self.last_added.clone()?;
        let remaining = self
            .counts
            .get(&id)
            .copied()
            .unwrap_or(0)
            .saturating_sub(1);
        if remaining == 0 {
            self.counts.remove(&id);
            self.last_added = None;
        } else {
            self.counts.insert(id.clone(), remaining);
        }
        Some(id)
    }

    /// Sum of all counts. The undo marker never contributes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Loads the store at `path`. A missing file yields an empty store.
///
/// # Errors
///
/// Returns [`StoreError::Read`] if the file exists but cannot be read, and
/// [`StoreError::Corrupt`] if it is not a flat object of counts plus `last`.
pub fn load(path: &Path) -> Result<IssueStore, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no issue store yet, starting empty");
            return Ok(IssueStore::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let store: IssueStore = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    for id in store.counts.keys() {
        if crate::catalog::lookup(id).is_none() {
            tracing::warn!(%id, "issue store contains an id missing from the catalog");
        }
    }
    tracing::debug!(
        path = %path.display(),
        entries = store.counts.len(),
        last = ?store.last_added,
        "loaded issue store"
    );
    Ok(store)
}

/// Writes `store` to `path`, replacing any previous contents.
///
/// The data is written to a temporary file next to `path` and renamed into
/// place, so a normal run never leaves a half-written store behind.
///
/// # Errors
///
/// Returns [`StoreError::Write`] if the directory, temp file, or rename fails.
pub fn save(path: &Path, store: &IssueStore) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(constants::STORE_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut tmp, formatter);
    store
        .serialize(&mut ser)
        .map_err(|e| write_err(std::io::Error::from(e)))?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), total = store.total(), "saved issue store");
    Ok(())
}
