//! Project resolution with per-package memoization

use crate::lockfile::nearest_lockfile;
use crate::vcs::nearest_vcs;
use crate::vendor::vendor_parent;
use crate::{Error, GopathLocator, PackageLocator, Project, ResolverConfig, Result, Tool};
use depscope_fs::FileSystem;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Resolves the project containing a Go package.
///
/// A project is the folder whose packages are versioned together. Two
/// upward searches from the package directory capture that:
///
/// 1. The nearest lockfile, used for resolving dependency versions. Its
///    absence is fine; the project then has `Tool::None`.
/// 2. The nearest VCS root, which bounds the project from above. Its
///    absence is an error.
///
/// The project root is the lower of the VCS root and the package's vendor
/// parent (the package directory itself when it isn't vendored), as long as
/// the vendor parent lies strictly inside the repository.
///
/// # Thread Safety
///
/// Results are cached per package for the resolver's lifetime behind a
/// `RwLock`. The lock is never held during filesystem access, and only
/// fully built projects are inserted, so concurrent callers at worst
/// resolve the same package twice with identical results.
pub struct ProjectResolver<F: FileSystem, L: PackageLocator> {
    fs: Arc<F>,
    locator: L,
    config: ResolverConfig,
    cache: RwLock<HashMap<String, Project>>,
}

impl<F: FileSystem> ProjectResolver<F, GopathLocator<F>> {
    /// Resolver that finds packages under `<workspace root>/src`
    ///
    /// # Errors
    /// Returns `Error::NoWorkspaceRoot` if the config has none
    pub fn gopath(fs: Arc<F>, config: ResolverConfig) -> Result<Self> {
        let locator = GopathLocator::from_config(Arc::clone(&fs), &config)?;
        Ok(Self::new(fs, locator, config))
    }
}

impl<F: FileSystem, L: PackageLocator> ProjectResolver<F, L> {
    /// Create a resolver with an empty cache
    pub fn new(fs: Arc<F>, locator: L, config: ResolverConfig) -> Self {
        Self {
            fs,
            locator,
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Project containing `package`.
    ///
    /// The first successful call per package touches the filesystem; later
    /// calls are answered from the cache. Failures are not cached.
    ///
    /// # Errors
    /// Returns `Error::Package` wrapping the cause: `NoWorkspaceRoot`,
    /// a package lookup error, `NoVcsRoot`, `InconsistentBoundary`,
    /// `PathComputation`, or `Io`.
    pub fn resolve(&self, package: &str) -> Result<Project> {
        if let Some(project) = self.cached(package) {
            debug!(package, "project cache hit");
            return Ok(project);
        }

        let project = self.compute(package).map_err(|e| Error::Package {
            package: package.to_string(),
            source: Box::new(e),
        })?;

        debug!(
            package,
            dir = %project.dir.display(),
            tool = %project.tool,
            import_path = %project.import_path,
            "resolved project"
        );
        self.cache
            .write()
            .entry(package.to_string())
            .or_insert_with(|| project.clone());

        Ok(project)
    }

    fn compute(&self, package: &str) -> Result<Project> {
        // Configuration problems win over anything on disk
        let src_dir = self.config.src_dir()?;

        let dir = self.locator.package_dir(package)?;

        let (tool, manifest) =
            match nearest_lockfile(&*self.fs, &dir, &self.config.lockfile_priority)? {
                Some((tool, manifest_dir)) => (tool, Some(manifest_dir)),
                None => (Tool::None, None),
            };

        let (vcs, repo_root) = nearest_vcs(&*self.fs, &dir)?;
        let parent = vendor_parent(&*self.fs, &dir)?;
        debug!(
            package,
            %vcs,
            repo_root = %repo_root.display(),
            vendor_parent = %parent.display(),
            "project boundaries"
        );

        let project_dir = select_project_dir(parent, repo_root)?;
        let import_path = import_prefix(&src_dir, &project_dir)?;

        Ok(Project {
            tool,
            manifest,
            dir: project_dir,
            import_path,
        })
    }

    /// Cached project for `package`, without resolving
    pub fn cached(&self, package: &str) -> Option<Project> {
        self.cache.read().get(package).cloned()
    }

    /// Distinct projects resolved so far, ordered by directory
    pub fn projects(&self) -> Vec<Project> {
        let cache = self.cache.read();
        let by_dir: BTreeMap<&Path, &Project> = cache
            .values()
            .map(|project| (project.dir.as_path(), project))
            .collect();
        by_dir.into_values().cloned().collect()
    }

    /// Number of packages resolved so far
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Configuration in use
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

/// The lower of the VCS root and the vendor parent.
///
/// The vendor parent only wins when it is strictly inside the repository;
/// vendored code never claims a boundary outside it.
fn select_project_dir(vendor_parent: PathBuf, vcs_root: PathBuf) -> Result<PathBuf> {
    if vendor_parent != vcs_root && vendor_parent.starts_with(&vcs_root) {
        Ok(vendor_parent)
    } else if vcs_root.starts_with(&vendor_parent) {
        Ok(vcs_root)
    } else {
        Err(Error::InconsistentBoundary {
            vendor_parent,
            vcs_root,
        })
    }
}

/// `dir` relative to `src_dir`, `/`-separated
fn import_prefix(src_dir: &Path, dir: &Path) -> Result<String> {
    let relative = dir
        .strip_prefix(src_dir)
        .map_err(|_| Error::PathComputation {
            dir: dir.to_path_buf(),
            base: src_dir.to_path_buf(),
        })?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
