//! Vendor directory boundaries

use crate::{Error, Result};
use depscope_fs::FileSystem;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::trace;

const VENDOR_DIR: &str = "vendor";

/// Directory that owns the vendored code containing `dir`
///
/// If `dir` lies beneath a `vendor` directory, returns the parent of the
/// outermost such directory: that parent's manifest pins the versions of
/// everything vendored below it, however deeply nested. Otherwise returns
/// `dir` unchanged.
///
/// A path component only counts if it exists as a directory and `dir` is
/// strictly inside it.
///
/// # Errors
/// Returns `Error::Io` if an existence check fails
pub fn vendor_parent<F: FileSystem + ?Sized>(fs: &F, dir: &Path) -> Result<PathBuf> {
    let mut current = PathBuf::new();
    let mut components = dir.components().peekable();

    while let Some(component) = components.next() {
        let is_last = components.peek().is_none();
        if component.as_os_str() == OsStr::new(VENDOR_DIR) && !is_last {
            let candidate = current.join(component);
            if fs.is_dir(&candidate).map_err(|e| Error::io(&candidate, e))? {
                trace!(parent = %current.display(), "found vendor tree");
                return Ok(current);
            }
        }
        current.push(component);
    }

    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use depscope_fs::MemoryFileSystem;

    #[test]
    fn test_unvendored_dir_is_unchanged() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/proj/pkg").unwrap();

        assert_eq!(
            vendor_parent(&fs, Path::new("/ws/src/proj/pkg")).unwrap(),
            PathBuf::from("/ws/src/proj/pkg")
        );
    }

    #[test]
    fn test_vendored_package() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/proj/vendor/github.com/x/y/pkg").unwrap();

        assert_eq!(
            vendor_parent(&fs, Path::new("/ws/src/proj/vendor/github.com/x/y/pkg")).unwrap(),
            PathBuf::from("/ws/src/proj")
        );
    }

    #[test]
    fn test_nested_vendor_resolves_to_outermost() {
        let fs = MemoryFileSystem::new();
        let dir = "/ws/src/proj/vendor/github.com/x/y/vendor/github.com/z/w";
        fs.add_dir(dir).unwrap();

        assert_eq!(
            vendor_parent(&fs, Path::new(dir)).unwrap(),
            PathBuf::from("/ws/src/proj")
        );
    }

    #[test]
    fn test_vendor_dir_itself_is_not_inside() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/proj/vendor").unwrap();

        assert_eq!(
            vendor_parent(&fs, Path::new("/ws/src/proj/vendor")).unwrap(),
            PathBuf::from("/ws/src/proj/vendor")
        );
    }

    #[test]
    fn test_similar_names_do_not_count() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/vendors/proj").unwrap();
        fs.add_dir("/ws/src/myvendor/proj").unwrap();

        for dir in ["/ws/src/vendors/proj", "/ws/src/myvendor/proj"] {
            assert_eq!(vendor_parent(&fs, Path::new(dir)).unwrap(), PathBuf::from(dir));
        }
    }

    #[test]
    fn test_vendor_file_is_not_a_tree() {
        // A path that merely names "vendor" without it being a directory on
        // disk is not vendored code
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/proj").unwrap();

        assert_eq!(
            vendor_parent(&fs, Path::new("/ws/src/proj/vendor/x")).unwrap(),
            PathBuf::from("/ws/src/proj/vendor/x")
        );
    }
}
