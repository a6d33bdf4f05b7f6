//! Package directory lookup

use crate::{Error, Result, ResolverConfig};
use depscope_fs::FileSystem;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Maps a package import path to its absolute directory
///
/// This is the seam to whatever knows where packages live: a `$GOPATH`
/// layout, a build tool's package listing, or a fixture in tests.
pub trait PackageLocator: Send + Sync {
    /// Absolute directory of the package
    ///
    /// # Errors
    /// Implementations return their own lookup errors; the resolver passes
    /// them through unchanged
    fn package_dir(&self, import_path: &str) -> Result<PathBuf>;
}

impl<T> PackageLocator for T
where
    T: Fn(&str) -> Result<PathBuf> + Send + Sync,
{
    fn package_dir(&self, import_path: &str) -> Result<PathBuf> {
        self(import_path)
    }
}

/// Locates packages at `<workspace root>/src/<import path>`
pub struct GopathLocator<F: FileSystem> {
    fs: Arc<F>,
    src_dir: PathBuf,
}

impl<F: FileSystem> GopathLocator<F> {
    /// Locator over the given workspace root
    pub fn new(fs: Arc<F>, workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            src_dir: workspace_root.into().join("src"),
        }
    }

    /// Locator over the workspace root of `config`
    ///
    /// # Errors
    /// Returns `Error::NoWorkspaceRoot` if the config has none
    pub fn from_config(fs: Arc<F>, config: &ResolverConfig) -> Result<Self> {
        Ok(Self {
            fs,
            src_dir: config.src_dir()?,
        })
    }
}

impl<F: FileSystem> PackageLocator for GopathLocator<F> {
    fn package_dir(&self, import_path: &str) -> Result<PathBuf> {
        validate_import_path(import_path)?;

        let dir = import_path
            .split('/')
            .fold(self.src_dir.clone(), |acc, segment| acc.join(segment));
        if !self.fs.is_dir(&dir).map_err(|e| Error::io(&dir, e))? {
            return Err(Error::PackageNotFound {
                package: import_path.to_string(),
                searched: dir,
            });
        }

        Ok(dir)
    }
}

/// Fixed import path to directory mapping
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    dirs: HashMap<String, PathBuf>,
}

impl StaticLocator {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a package directory
    pub fn insert(&mut self, import_path: impl Into<String>, dir: impl Into<PathBuf>) {
        self.dirs.insert(import_path.into(), dir.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, import_path: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.insert(import_path, dir);
        self
    }
}

impl PackageLocator for StaticLocator {
    fn package_dir(&self, import_path: &str) -> Result<PathBuf> {
        self.dirs
            .get(import_path)
            .cloned()
            .ok_or_else(|| Error::PackageNotFound {
                package: import_path.to_string(),
                searched: PathBuf::new(),
            })
    }
}

/// Reject import paths that could not name a directory under `src`
fn validate_import_path(import_path: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidImportPath {
        package: import_path.to_string(),
        reason: reason.to_string(),
    };

    if import_path.is_empty() {
        return Err(invalid("empty"));
    }
    if import_path.starts_with('/') || import_path.contains('\\') {
        return Err(invalid("must be a relative, '/'-separated path"));
    }
    for segment in import_path.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative path segment")),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use depscope_fs::MemoryFileSystem;

    #[test]
    fn test_gopath_locator_finds_package() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_dir("/ws/src/github.com/acme/tool").unwrap();
        let locator = GopathLocator::new(fs, "/ws");

        assert_eq!(
            locator.package_dir("github.com/acme/tool").unwrap(),
            PathBuf::from("/ws/src/github.com/acme/tool")
        );
    }

    #[test]
    fn test_gopath_locator_missing_package() {
        let fs = Arc::new(MemoryFileSystem::new());
        let locator = GopathLocator::new(fs, "/ws");

        let err = locator.package_dir("github.com/acme/gone").unwrap_err();
        assert!(matches!(
            err,
            Error::PackageNotFound { ref package, ref searched }
                if package == "github.com/acme/gone"
                    && searched == &PathBuf::from("/ws/src/github.com/acme/gone")
        ));
    }

    #[test]
    fn test_gopath_locator_rejects_bad_paths() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_dir("/ws/src/a").unwrap();
        let locator = GopathLocator::new(fs, "/ws");

        for bad in ["", "/abs", "a//b", "a/../b", "./a", "a\\b"] {
            assert!(
                matches!(locator.package_dir(bad), Err(Error::InvalidImportPath { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_config_requires_workspace_root() {
        let fs = Arc::new(MemoryFileSystem::new());
        let result = GopathLocator::from_config(fs, &ResolverConfig::default());
        assert!(matches!(result, Err(Error::NoWorkspaceRoot)));
    }

    #[test]
    fn test_static_locator() {
        let locator = StaticLocator::new().with("example.com/a", "/ws/src/example.com/a");

        assert_eq!(
            locator.package_dir("example.com/a").unwrap(),
            PathBuf::from("/ws/src/example.com/a")
        );
        assert!(locator.package_dir("example.com/b").is_err());
    }

    #[test]
    fn test_closure_locator() {
        let locator = |path: &str| -> Result<PathBuf> { Ok(PathBuf::from("/pkgs").join(path)) };
        assert_eq!(locator.package_dir("x").unwrap(), PathBuf::from("/pkgs/x"));
    }
}
