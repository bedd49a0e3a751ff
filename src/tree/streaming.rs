//! TextWalker - streams text lines without building the tree in memory

use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::fs::{DirectorySource, OsDirectorySource, entry_path};

use super::config::WalkerConfig;

/// One indentation step in text output.
pub const INDENT_UNIT: &str = "\t";

/// How a text line marks its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMarker {
    /// Rendered with a trailing `/`
    Directory,
    /// Rendered with a trailing `*`
    Link,
    Plain,
}

impl EntryMarker {
    pub fn suffix(self) -> &'static str {
        match self {
            EntryMarker::Directory => "/",
            EntryMarker::Link => "*",
            EntryMarker::Plain => "",
        }
    }
}

/// Callback for streaming output - receives one line per entry.
pub trait TextOutput {
    fn output_entry(&mut self, indent: &str, name: &str, marker: EntryMarker) -> io::Result<()>;
}

/// Text walker that writes each entry as soon as it is listed.
/// Uses O(depth) memory; directory-ness is checked before link-ness.
pub struct TextWalker<S = OsDirectorySource> {
    config: WalkerConfig,
    source: S,
}

impl TextWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_source(config, OsDirectorySource)
    }
}

impl<S: DirectorySource> TextWalker<S> {
    pub fn with_source(config: WalkerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Walk `root`, starting one indentation step in so the listing nests
    /// under the echoed root path.
    pub fn walk_streaming<O: TextOutput>(&self, root: &Path, output: &mut O) -> io::Result<()> {
        self.walk_dir_streaming(root, 0, INDENT_UNIT, output)
    }

    fn walk_dir_streaming<O: TextOutput>(
        &self,
        path: &Path,
        depth: usize,
        indent: &str,
        output: &mut O,
    ) -> io::Result<()> {
        debug!("listing {}", path.display());

        let entries = match self.source.list_directory(path) {
            Ok(e) => e,
            Err(e) => {
                warn!("{}", e);
                return Ok(());
            }
        };

        for entry in entries {
            let full_path = entry_path(path, &entry.file_name);

            if entry.is_dir {
                output.output_entry(indent, &entry.name, EntryMarker::Directory)?;
                if self.config.recursive {
                    if self.config.may_descend(depth) {
                        let child_indent = format!("{}{}", indent, INDENT_UNIT);
                        self.walk_dir_streaming(&full_path, depth + 1, &child_indent, output)?;
                    } else {
                        warn!(
                            "maximum depth {} reached, not descending into {}",
                            self.config.max_depth,
                            full_path.display()
                        );
                    }
                }
            } else if self.source.read_link_target(&full_path).is_some() {
                output.output_entry(indent, &entry.name, EntryMarker::Link)?;
            } else {
                output.output_entry(indent, &entry.name, EntryMarker::Plain)?;
            }
        }

        Ok(())
    }
}
