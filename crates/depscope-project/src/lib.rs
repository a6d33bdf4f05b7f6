//! # depscope-project
//!
//! Finds the "project" a Go package belongs to: the folder versioned as one
//! unit, the dependency manifest that pins its versions, and its import-path
//! prefix under the workspace root (`$GOPATH`).
//!
//! This crate provides:
//! - Nearest-manifest lookup for Go dependency tools (dep, glide, godep, ...)
//! - Nearest version-control root lookup (git, svn, hg, bzr)
//! - Vendor directory boundary handling
//! - A memoizing [`ProjectResolver`] combining the above
//!
//! ## Architecture
//!
//! Filesystem access goes through `depscope_fs::FileSystem` and package
//! lookup through [`PackageLocator`], so resolution can run against an
//! in-memory tree in tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use depscope_fs::NativeFileSystem;
//! use depscope_project::{ProjectResolver, ResolverConfig};
//! use std::sync::Arc;
//!
//! # fn example() -> depscope_project::Result<()> {
//! let config = ResolverConfig::from_env()?;
//! let resolver = ProjectResolver::gopath(Arc::new(NativeFileSystem::new()), config)?;
//!
//! let project = resolver.resolve("github.com/acme/tool/cmd/tool")?;
//! println!("{} ({}) at {}", project.import_path, project.tool, project.dir.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod locator;
pub mod lockfile;
pub mod resolver;
pub mod tool;
pub mod types;
pub mod vcs;
pub mod vendor;

// Re-export main types and traits
pub use config::ResolverConfig;
pub use error::{Error, Result};
pub use locator::{GopathLocator, PackageLocator, StaticLocator};
pub use resolver::ProjectResolver;
pub use tool::{Marker, MarkerKind, Tool, Vcs};
pub use types::Project;

// Re-export the individual searches
pub use lockfile::nearest_lockfile;
pub use vcs::nearest_vcs;
pub use vendor::vendor_parent;
