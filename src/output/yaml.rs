//! YAML output formatting

use crate::error::Result;
use crate::tree::DirEntryNode;

/// Serialize nodes as block-style YAML.
pub fn render_yaml(nodes: &[DirEntryNode]) -> Result<Vec<u8>> {
    let yaml = serde_yaml::to_string(nodes)?;
    Ok(yaml.into_bytes())
}
