//! Listing formatting and display
//!
//! This module provides renderers for the three output forms:
//! - Text output, streamed line by line (optionally colored)
//! - JSON output
//! - YAML output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `text` - Streaming text formatter fed by `TextWalker`
//! - `json` - JSON rendering of the node tree
//! - `yaml` - YAML rendering of the node tree

mod config;
mod json;
mod text;
mod yaml;

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::DirEntryNode;

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat, StructuredFormat};
pub use json::render_json;
pub use text::TextFormatter;
pub use yaml::render_yaml;

/// Render the node tree in a structured format.
pub fn render_structured(nodes: &[DirEntryNode], format: StructuredFormat) -> Result<Vec<u8>> {
    match format {
        StructuredFormat::Json => render_json(nodes),
        StructuredFormat::Yaml => render_yaml(nodes),
    }
}

/// Print the node tree in a structured format to stdout.
pub fn print_structured(nodes: &[DirEntryNode], format: StructuredFormat) -> Result<()> {
    let bytes = render_structured(nodes, format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    if !bytes.ends_with(b"\n") {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
