//! Directory listing and symbolic link probing
//!
//! Both walkers read the filesystem only through [`DirectorySource`], so the
//! traversal logic can be exercised against an in-memory tree in tests.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf, is_separator};
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::error::{ListerError, Result};

/// One entry of a directory listing, as reported by the filesystem.
///
/// `name` is for display only; paths are built from the raw `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub file_name: OsString,
    pub size: i64,
    pub modified: SystemTime,
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn file(name: impl Into<String>, size: i64) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            size,
            modified: UNIX_EPOCH,
            is_dir: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            size: 0,
            modified: UNIX_EPOCH,
            is_dir: true,
        }
    }
}

/// Source of directory listings and link targets.
pub trait DirectorySource {
    /// List the immediate entries of `path`, in the order they should be shown.
    fn list_directory(&self, path: &Path) -> Result<Vec<ListedEntry>>;

    /// Resolve `path` as a symbolic link. `None` means "not a link".
    fn read_link_target(&self, path: &Path) -> Option<String>;
}

/// [`DirectorySource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectorySource;

impl DirectorySource for OsDirectorySource {
    fn list_directory(&self, path: &Path) -> Result<Vec<ListedEntry>> {
        let entries = fs::read_dir(path).map_err(|source| ListerError::DirectoryAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut listed = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let entry_path = entry.path();

            // Follow links so a symlinked directory reports as a directory;
            // broken links fall back to the link's own metadata.
            let metadata = match fs::metadata(&entry_path).or_else(|_| entry.metadata()) {
                Ok(m) => m,
                Err(e) => {
                    warn!("skipping {}: {}", entry_path.display(), e);
                    continue;
                }
            };

            let file_name = entry.file_name();
            listed.push(ListedEntry {
                name: file_name.to_string_lossy().to_string(),
                file_name,
                size: i64::try_from(metadata.len()).unwrap_or(i64::MAX),
                modified: metadata.modified().unwrap_or(UNIX_EPOCH),
                is_dir: metadata.is_dir(),
            });
        }

        listed.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(listed)
    }

    fn read_link_target(&self, path: &Path) -> Option<String> {
        fs::read_link(path)
            .ok()
            .map(|target| target.to_string_lossy().to_string())
    }
}

/// Check that `path` can be listed before any output is produced.
pub fn validate_root<S: DirectorySource>(source: &S, path: &Path) -> Result<()> {
    source
        .list_directory(path)
        .map(|_| ())
        .map_err(|_| ListerError::PathInvalid(path.to_path_buf()))
}

/// Append a trailing separator to `path` if it lacks one.
pub fn normalize_root(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    match raw.as_encoded_bytes().last() {
        Some(&b) if is_separator(char::from(b)) => path.to_path_buf(),
        _ => {
            let mut normalized = OsString::from(raw);
            normalized.push(std::path::MAIN_SEPARATOR_STR);
            PathBuf::from(normalized)
        }
    }
}

/// Path of `file_name` inside `dir`, without a trailing separator.
pub fn entry_path(dir: &Path, file_name: &OsStr) -> PathBuf {
    dir.join(file_name)
}
