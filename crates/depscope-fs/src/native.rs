//! Native filesystem implementation using std::fs.

use crate::{FileMetadata, FileSystem};
use std::io;
use std::path::Path;

/// Native filesystem implementation using std::fs.
///
/// Symbolic links are followed, so a link to a directory answers `is_dir`.
/// Unlike an analysis sandbox this is not scoped to a root: ancestor walks
/// have to reach the filesystem root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new native filesystem handle.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NativeFileSystem {
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(FileMetadata {
                exists: true,
                is_file: meta.is_file(),
                is_dir: meta.is_dir(),
            }),
            Err(e) if is_absent(&e) => Ok(FileMetadata::absent()),
            Err(e) => Err(e),
        }
    }
}

/// `a/file/b` fails with `NotADirectory` rather than `NotFound`; both mean
/// the path isn't there.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
