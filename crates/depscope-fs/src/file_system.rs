//! FileSystem trait for existence checks.

use std::io;
use std::path::Path;

/// What a path points at, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMetadata {
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a file (false if directory or doesn't exist).
    pub is_file: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
}

impl FileMetadata {
    /// Metadata for a path that does not exist.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Metadata for an existing regular file.
    pub fn file() -> Self {
        Self {
            exists: true,
            is_file: true,
            is_dir: false,
        }
    }

    /// Metadata for an existing directory.
    pub fn dir() -> Self {
        Self {
            exists: true,
            is_file: false,
            is_dir: true,
        }
    }
}

/// Read-only existence predicates over a filesystem.
///
/// # Design Decisions
///
/// ## Sync, not async
///
/// Every check is a single `stat`-sized call. Callers walk a directory's
/// ancestor chain with a handful of checks per level, so there is nothing to
/// gain from offloading to a blocking pool.
///
/// ## Error Handling
///
/// Uses `std::io::Result<T>`:
/// - A missing path is `Ok(false)` / [`FileMetadata::absent`], never an error.
/// - A path whose parent is a regular file is also absent.
/// - Anything else (permissions, I/O failures) is returned unchanged.
pub trait FileSystem: Send + Sync {
    /// Get file/directory metadata.
    ///
    /// Returns metadata even if the path doesn't exist (`exists == false`).
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.metadata(path)?.exists)
    }

    /// Check if a path exists and is a regular file.
    fn is_file(&self, path: &Path) -> io::Result<bool> {
        Ok(self.metadata(path)?.is_file)
    }

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(self.metadata(path)?.is_dir)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for std::sync::Arc<F> {
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        (**self).metadata(path)
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> io::Result<bool> {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }
}
