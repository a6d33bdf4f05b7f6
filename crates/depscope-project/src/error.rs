//! Error types for depscope-project

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using depscope-project Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a package's project
#[derive(Debug, Error)]
pub enum Error {
    /// No version-control root between the package directory and the filesystem root
    #[error("No VCS root found above {dir:?}")]
    NoVcsRoot {
        /// Directory the search started from
        dir: PathBuf,
    },

    /// Workspace root (`$GOPATH`) is not configured
    #[error("No workspace root configured (is $GOPATH set?)")]
    NoWorkspaceRoot,

    /// Project root does not lie beneath `<workspace root>/src`
    #[error("Cannot compute import path: {dir:?} is not under {base:?}")]
    PathComputation {
        /// Resolved project root
        dir: PathBuf,
        /// The `src` directory of the workspace root
        base: PathBuf,
    },

    /// Vendor parent and VCS root are not on the same ancestor chain
    #[error("Vendor parent {vendor_parent:?} and VCS root {vcs_root:?} are unrelated")]
    InconsistentBoundary {
        /// Directory containing the outermost vendor tree
        vendor_parent: PathBuf,
        /// Nearest VCS root
        vcs_root: PathBuf,
    },

    /// The package directory does not exist
    #[error("Package '{package}' not found at {searched:?}")]
    PackageNotFound {
        /// Import path that was looked up
        package: String,
        /// Directory that was expected to hold it
        searched: PathBuf,
    },

    /// The import path cannot name a directory
    #[error("Invalid import path '{package}': {reason}")]
    InvalidImportPath {
        /// Offending import path
        package: String,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid resolver configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An existence check failed for a reason other than absence
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// Path being checked
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Resolution of a specific package failed
    #[error("Resolving package '{package}': {source}")]
    Package {
        /// Import path being resolved
        package: String,
        /// What went wrong
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The error underneath any per-package context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Package { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
