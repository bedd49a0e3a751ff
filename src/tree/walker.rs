//! TreeWalker - builds the full tree in memory for JSON and YAML output

use std::path::Path;

use log::{debug, warn};

use crate::fs::{DirectorySource, OsDirectorySource, entry_path};

use super::config::WalkerConfig;
use super::node::DirEntryNode;

/// Tree walker that materializes every entry as a [`DirEntryNode`].
/// Required for structured output, which needs the complete tree.
/// For text output, use TextWalker instead.
pub struct TreeWalker<S = OsDirectorySource> {
    config: WalkerConfig,
    source: S,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_source(config, OsDirectorySource)
    }
}

impl<S: DirectorySource> TreeWalker<S> {
    pub fn with_source(config: WalkerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Walk `root` and return its entries in listing order.
    pub fn walk(&self, root: &Path) -> Vec<DirEntryNode> {
        self.walk_dir(root, 0)
    }

    fn walk_dir(&self, path: &Path, depth: usize) -> Vec<DirEntryNode> {
        debug!("listing {}", path.display());

        let entries = match self.source.list_directory(path) {
            Ok(e) => e,
            Err(e) => {
                warn!("{}", e);
                return Vec::new();
            }
        };

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let full_path = entry_path(path, &entry.file_name);
            // Probed for directories too; the flag is independent of is_dir.
            let link_target = self.source.read_link_target(&full_path);
            let node = DirEntryNode::from_listing(entry, link_target);

            let node = if node.is_directory && self.config.recursive {
                if self.config.may_descend(depth) {
                    let children = self.walk_dir(&full_path, depth + 1);
                    node.with_children(children)
                } else {
                    warn!(
                        "maximum depth {} reached, not descending into {}",
                        self.config.max_depth,
                        full_path.display()
                    );
                    node
                }
            } else {
                node
            };

            nodes.push(node);
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::ListedEntry;
    use crate::fs::fake::FakeSource;

    fn sample_source() -> FakeSource {
        FakeSource::new()
            .dir(
                "/tmp/x",
                vec![
                    ListedEntry::file("a.txt", 10),
                    ListedEntry::directory("b"),
                    ListedEntry::directory("link"),
                ],
            )
            .dir("/tmp/x/b", vec![ListedEntry::file("c.txt", 5)])
            .dir("/tmp/x/link", vec![ListedEntry::file("c.txt", 5)])
            .link("/tmp/x/link", "b")
    }

    #[test]
    fn test_flat_walk_has_no_children() {
        let walker = TreeWalker::with_source(WalkerConfig::default(), sample_source());
        let nodes = walker.walk(Path::new("/tmp/x"));

        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|n| n.children.is_empty()));
        assert!(nodes[1].is_directory);
    }

    #[test]
    fn test_recursive_walk_follows_directories() {
        let walker = TreeWalker::with_source(WalkerConfig::recursive(), sample_source());
        let nodes = walker.walk(Path::new("/tmp/x"));

        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b", "link"]);

        let b = &nodes[1];
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].name, "c.txt");
        assert_eq!(b.children[0].size, 5);
        assert!(b.children[0].children.is_empty());
    }

    #[test]
    fn test_symlinked_directory_is_traversed_and_flagged() {
        let walker = TreeWalker::with_source(WalkerConfig::recursive(), sample_source());
        let nodes = walker.walk(Path::new("/tmp/x"));

        let link = &nodes[2];
        assert!(link.is_directory);
        assert!(link.is_symbolic_link);
        assert_eq!(link.link_target, "b");
        assert_eq!(link.children.len(), 1);
    }

    #[test]
    fn test_unreadable_subdirectory_is_contained() {
        let source = FakeSource::new()
            .dir(
                "/r",
                vec![
                    ListedEntry::directory("locked"),
                    ListedEntry::directory("open"),
                    ListedEntry::file("z.txt", 1),
                ],
            )
            .unreadable("/r/locked")
            .dir("/r/open", vec![ListedEntry::file("inner.txt", 3)]);
        let walker = TreeWalker::with_source(WalkerConfig::recursive(), source);
        let nodes = walker.walk(Path::new("/r"));

        assert_eq!(nodes.len(), 3);
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[1].children[0].name, "inner.txt");
        assert_eq!(nodes[2].name, "z.txt");
    }

    #[test]
    fn test_unreadable_root_yields_empty() {
        let walker =
            TreeWalker::with_source(WalkerConfig::recursive(), FakeSource::new().unreadable("/r"));
        assert!(walker.walk(Path::new("/r")).is_empty());
    }

    #[test]
    fn test_depth_ceiling_stops_descent() {
        let source = FakeSource::new()
            .dir("/r", vec![ListedEntry::directory("one")])
            .dir("/r/one", vec![ListedEntry::directory("two")])
            .dir("/r/one/two", vec![ListedEntry::file("deep.txt", 1)]);
        let config = WalkerConfig {
            recursive: true,
            max_depth: 1,
        };
        let nodes = TreeWalker::with_source(config, source).walk(Path::new("/r"));

        let one = &nodes[0];
        assert_eq!(one.children.len(), 1);
        let two = &one.children[0];
        assert_eq!(two.name, "two");
        assert!(two.is_directory);
        assert!(two.children.is_empty());
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let source = FakeSource::new().dir(
            "/r",
            vec![
                ListedEntry::file("zebra", 1),
                ListedEntry::file("apple", 1),
                ListedEntry::file("middle", 1),
            ],
        );
        let nodes = TreeWalker::with_source(WalkerConfig::default(), source).walk(Path::new("/r"));
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "middle"]);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_non_utf8_names_recurse_and_probe_links() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::TempDir::new().unwrap();
        let bad_dir = dir.path().join(OsStr::from_bytes(b"bad\xffdir"));
        std::fs::create_dir(&bad_dir).unwrap();
        std::fs::write(bad_dir.join("inner.txt"), "x").unwrap();
        std::fs::write(dir.path().join("target"), "x").unwrap();
        std::os::unix::fs::symlink("target", dir.path().join(OsStr::from_bytes(b"ln\xfe")))
            .unwrap();

        let nodes = TreeWalker::new(WalkerConfig::recursive()).walk(dir.path());
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["bad\u{fffd}dir", "ln\u{fffd}", "target"]);

        assert!(nodes[0].is_directory);
        assert_eq!(nodes[0].children.len(), 1);
        assert_eq!(nodes[0].children[0].name, "inner.txt");

        assert!(nodes[1].is_symbolic_link);
        assert_eq!(nodes[1].link_target, "target");
    }
}
