//! JSON output formatting

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::tree::DirEntryNode;

/// Serialize nodes as pretty-printed JSON, indented one tab per level.
pub fn render_json(nodes: &[DirEntryNode]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    nodes.serialize(&mut serializer)?;
    Ok(buf)
}
