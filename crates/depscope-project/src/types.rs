//! Core types for project resolution

use crate::Tool;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A folder versioned as a single unit; it may contain many Go packages.
///
/// Invariants:
/// - `dir` is the package directory or one of its ancestors
/// - `<workspace root>/src/<import_path>` is `dir`
/// - `manifest` is `None` exactly when `tool` is `Tool::None`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Project {
    /// Dependency-management tool governing the project
    pub tool: Tool,
    /// Directory holding the tool's manifest
    pub manifest: Option<PathBuf>,
    /// Absolute project root
    pub dir: PathBuf,
    /// Import path prefix of project code, `/`-separated
    pub import_path: String,
}

impl Project {
    /// Whether `import_path` names this project or a package inside it.
    ///
    /// Matching is by whole path segment, so `github.com/a/b` contains
    /// `github.com/a/b/c` but not `github.com/a/bc`.
    pub fn contains(&self, import_path: &str) -> bool {
        if self.import_path.is_empty() {
            return true;
        }
        match import_path.strip_prefix(self.import_path.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Whether a manifest was found for this project
    pub fn has_manifest(&self) -> bool {
        self.tool != Tool::None
    }

    /// Manifest directory, if any
    pub fn manifest_dir(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }
}
