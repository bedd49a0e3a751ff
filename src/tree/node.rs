//! Serializable node model shared by the JSON and YAML renderers

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fs::ListedEntry;

/// One filesystem entry discovered during traversal.
///
/// `children` is always serialized, as an empty sequence for leaves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntryNode {
    pub name: String,
    pub modified_time: DateTime<Local>,
    pub size: i64,
    pub is_directory: bool,
    pub is_symbolic_link: bool,
    pub link_target: String,
    pub children: Vec<DirEntryNode>,
}

impl DirEntryNode {
    /// Build a leaf node from a listing entry and the result of its link probe.
    pub fn from_listing(entry: ListedEntry, link_target: Option<String>) -> Self {
        Self {
            is_symbolic_link: link_target.is_some(),
            link_target: link_target.unwrap_or_default(),
            modified_time: DateTime::<Local>::from(entry.modified),
            size: entry.size,
            is_directory: entry.is_dir,
            name: entry.name,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DirEntryNode>) -> Self {
        self.children = children;
        self
    }
}
