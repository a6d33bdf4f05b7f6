//! In-memory filesystem implementation.

use crate::{FileMetadata, FileSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    File,
    Dir,
    /// Exists, but every check against it fails with `PermissionDenied`.
    Denied,
}

/// In-memory filesystem tree.
///
/// Only names and kinds are stored, never contents. Adding a path creates
/// its parent directories implicitly, the way `mkdir -p` would.
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<HashMap>>` for interior mutability:
/// - Multiple concurrent readers (common case)
/// - Exclusive writer (rare: only during setup)
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: Arc<RwLock<HashMap<PathBuf, Entry>>>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem containing only the root directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for relative paths and `AlreadyExists` when a
    /// directory already occupies the path or a file occupies a parent.
    pub fn add_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.insert(path.as_ref(), Entry::File)
    }

    /// Add a directory, creating parent directories as needed.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.insert(path.as_ref(), Entry::Dir)
    }

    /// Make every check against `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.insert(path.as_ref(), Entry::Denied)
    }

    /// Remove a path and everything beneath it.
    ///
    /// Removing a path that isn't there is a no-op.
    pub fn remove(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let normalized = Self::normalize_path(path.as_ref())?;
        self.entries
            .write()
            .retain(|existing, _| !existing.starts_with(&normalized));
        Ok(())
    }

    fn insert(&self, path: &Path, entry: Entry) -> io::Result<()> {
        let normalized = Self::normalize_path(path)?;
        let mut entries = self.entries.write();

        for ancestor in normalized.ancestors().skip(1) {
            if ancestor.parent().is_none() {
                break;
            }
            match entries.get(ancestor) {
                Some(Entry::Dir) => {}
                Some(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("Not a directory: {}", ancestor.display()),
                    ))
                }
                None => {
                    entries.insert(ancestor.to_path_buf(), Entry::Dir);
                }
            }
        }

        match entries.get(&normalized) {
            Some(existing) if *existing == entry => Ok(()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Path already exists: {}", normalized.display()),
            )),
            None => {
                entries.insert(normalized, entry);
                Ok(())
            }
        }
    }

    /// Syntactic normalization of an absolute path (removes `.` and `..`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for relative paths and for `..` above the root.
    pub fn normalize_path(path: &Path) -> io::Result<PathBuf> {
        if !path.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path must be absolute: {}", path.display()),
            ));
        }

        let mut result = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    result.push(component.as_os_str());
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if result.parent().is_none() {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("Path escapes the root: {}", path.display()),
                        ));
                    }
                    result.pop();
                }
                Component::Normal(name) => result.push(name),
            }
        }

        Ok(result)
    }
}

impl FileSystem for MemoryFileSystem {
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let normalized = Self::normalize_path(path)?;
        if normalized.parent().is_none() {
            return Ok(FileMetadata::dir());
        }

        match self.entries.read().get(&normalized) {
            Some(Entry::File) => Ok(FileMetadata::file()),
            Some(Entry::Dir) => Ok(FileMetadata::dir()),
            Some(Entry::Denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", normalized.display()),
            )),
            None => Ok(FileMetadata::absent()),
        }
    }
}
