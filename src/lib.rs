//! Filelister - list a directory as an indented tree, JSON, or YAML

pub mod error;
pub mod fs;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListerError, Result};
pub use fs::{DirectorySource, ListedEntry, OsDirectorySource, normalize_root, validate_root};
pub use output::{
    OutputConfig, OutputFormat, StructuredFormat, TextFormatter, print_structured, render_json,
    render_structured, render_yaml,
};
pub use tree::{DEFAULT_MAX_DEPTH, DirEntryNode, TextWalker, TreeWalker, WalkerConfig};
