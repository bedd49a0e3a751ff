//! Configuration types for tree walkers

/// Default recursion ceiling. A symlink cycle stops here with a warning.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Number of directory levels below the root that may be listed
    pub max_depth: usize,
}

impl WalkerConfig {
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            ..Default::default()
        }
    }

    /// Whether a directory at `depth` (root = 0) may be descended into.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.recursive && depth < self.max_depth
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
