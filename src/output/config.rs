//! Output configuration types

use clap::ValueEnum;

/// Representation of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented plain-text tree
    #[default]
    Text,
    /// Pretty-printed JSON, tab indented
    Json,
    /// Block-style YAML
    Yaml,
}

/// Formats rendered from the full in-memory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// The structured form of this format, or `None` for streamed text.
    pub fn structured(self) -> Option<StructuredFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(StructuredFormat::Json),
            OutputFormat::Yaml => Some(StructuredFormat::Yaml),
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Only applies to text output
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            use_color: true,
        }
    }
}
