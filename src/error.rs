//! Error types shared by the walkers and renderers

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while listing or rendering a directory tree.
///
/// Only `PathInvalid` and the output errors ever reach the caller of a run.
/// `DirectoryAccess` is recovered inside the walkers: the offending directory
/// is reported and treated as empty.
#[derive(Error, Debug)]
pub enum ListerError {
    #[error("invalid path/directory: {}", .0.display())]
    PathInvalid(PathBuf),

    #[error("error reading directory: {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not convert to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not convert to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ListerError>;
