//! Filesystem capability used by resolvers.
//!
//! Resolvers only ever ask whether a path exists, so the capability is a
//! single-method trait. `OsFs` checks the real filesystem; `MemoryFs` holds
//! a fixed set of paths.

use pkgref_util::path::normalize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Existence check used by the walk-up.
pub trait FileSystem: Send + Sync {
    /// Check whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory filesystem holding a set of files and their ancestor directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: HashSet<PathBuf>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem containing the given files.
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut fs = Self::new();
        for file in files {
            fs.add_file(file);
        }
        fs
    }

    /// Add a file; its ancestor directories exist implicitly.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.entries.insert(ancestor.to_path_buf());
        }
    }

    /// Number of known paths, directories included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.entries.contains(&normalize(path))
    }
}
