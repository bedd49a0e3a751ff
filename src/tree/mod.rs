//! Directory tree walking logic
//!
//! This module provides tree walking capabilities for listing directory contents.
//! It supports two main modes:
//!
//! - `TreeWalker`: Builds full tree in memory, required for JSON and YAML output
//! - `TextWalker`: Streams lines directly, uses O(depth) memory for text output
//!
//! The two walkers share the directory source but not a data structure. They
//! differ on symlinked directories: the tree records the link flag on every
//! node, while text output marks any directory with `/`, linked or not.

mod config;
mod node;
mod streaming;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use node::DirEntryNode;
pub use streaming::{EntryMarker, INDENT_UNIT, TextOutput, TextWalker};
pub use walker::TreeWalker;
