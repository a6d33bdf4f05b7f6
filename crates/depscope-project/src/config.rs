//! Resolver configuration
//!
//! The workspace root is injected here rather than read from the process
//! environment by the resolver, so resolution stays a pure function of the
//! filesystem and this value.

use crate::{Error, Result, Tool};
use serde::Deserialize;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable holding the workspace root
pub const GOPATH_VAR: &str = "GOPATH";

/// Configuration for a [`ProjectResolver`](crate::ProjectResolver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Workspace root (`$GOPATH`); first-party code lives under its `src`
    pub workspace_root: Option<PathBuf>,
    /// Tool order used to break ties between manifests in one directory
    pub lockfile_priority: Vec<Tool>,
}

/// On-disk representation (`depscope.toml`)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    workspace_root: Option<PathBuf>,
    lockfile_priority: Option<Vec<Tool>>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            lockfile_priority: Tool::DEFAULT_PRIORITY.to_vec(),
        }
    }
}

impl ResolverConfig {
    /// Configuration with the given workspace root and default priorities
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: Some(workspace_root.into()),
            ..Self::default()
        }
    }

    /// Replace the lockfile priority order
    ///
    /// # Errors
    /// Returns `Error::Config` if the order names `none` or repeats a tool
    pub fn with_lockfile_priority(mut self, priority: Vec<Tool>) -> Result<Self> {
        validate_priority(&priority)?;
        self.lockfile_priority = priority;
        Ok(self)
    }

    /// Read the workspace root from `$GOPATH`
    ///
    /// An unset or empty variable leaves the workspace root unset; resolution
    /// then fails with `Error::NoWorkspaceRoot`.
    ///
    /// # Errors
    /// Returns `Error::Io` if a relative value cannot be made absolute
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(GOPATH_VAR) {
            Some(value) => Self::from_gopath(&value),
            None => Ok(Self::default()),
        }
    }

    /// Build from a `$GOPATH`-style value
    ///
    /// A path list uses its first non-empty entry, as `go` does for `src`
    /// lookups of the main workspace.
    ///
    /// # Errors
    /// Returns `Error::Io` if a relative value cannot be made absolute
    pub fn from_gopath(value: &OsStr) -> Result<Self> {
        let first = std::env::split_paths(value).find(|p| !p.as_os_str().is_empty());
        let workspace_root = match first {
            Some(path) => Some(std::path::absolute(&path).map_err(|e| Error::io(&path, e))?),
            None => None,
        };

        Ok(Self {
            workspace_root,
            ..Self::default()
        })
    }

    /// Parse a TOML configuration
    ///
    /// ```toml
    /// workspace_root = "/home/me/go"
    /// lockfile_priority = ["dep", "glide", "gomodules"]
    /// ```
    ///
    /// # Errors
    /// Returns `Error::Config` for malformed TOML, unknown tools, or a
    /// relative workspace root
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;

        if let Some(root) = &file.workspace_root {
            if !root.as_os_str().is_empty() && !root.is_absolute() {
                return Err(Error::Config(format!(
                    "workspace_root must be absolute, got {:?}",
                    root
                )));
            }
        }

        let config = Self {
            workspace_root: file.workspace_root,
            ..Self::default()
        };
        match file.lockfile_priority {
            Some(priority) => config.with_lockfile_priority(priority),
            None => Ok(config),
        }
    }

    /// Load a TOML configuration file
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str)
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    /// The configured workspace root
    ///
    /// # Errors
    /// Returns `Error::NoWorkspaceRoot` if unset or empty
    pub fn workspace_root(&self) -> Result<&Path> {
        match self.workspace_root.as_deref() {
            Some(root) if !root.as_os_str().is_empty() => Ok(root),
            _ => Err(Error::NoWorkspaceRoot),
        }
    }

    /// `<workspace root>/src`, the base of first-party import paths
    ///
    /// # Errors
    /// Returns `Error::NoWorkspaceRoot` if the workspace root is unset
    pub fn src_dir(&self) -> Result<PathBuf> {
        Ok(self.workspace_root()?.join("src"))
    }
}

fn validate_priority(priority: &[Tool]) -> Result<()> {
    let mut seen = HashSet::new();
    for tool in priority {
        if *tool == Tool::None {
            return Err(Error::Config(
                "lockfile_priority cannot contain 'none'".to_string(),
            ));
        }
        if !seen.insert(*tool) {
            return Err(Error::Config(format!(
                "lockfile_priority lists '{}' twice",
                tool
            )));
        }
    }
    Ok(())
}
