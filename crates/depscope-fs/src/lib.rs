//! Filesystem existence predicates for depscope.
//!
//! This crate provides a `FileSystem` trait answering "does this path exist,
//! and is it a file or a directory?" on the native filesystem (using
//! `std::fs`) and on an in-memory tree (for tests and embedders).
//!
//! # Example
//!
//! ```no_run
//! use depscope_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new();
//! if fs.is_dir(Path::new("/home/me/go/src/github.com/acme/tool/.git"))? {
//!     println!("found a git checkout");
//! }
//! # Ok(())
//! # }
//! ```

mod file_system;
pub use file_system::{FileMetadata, FileSystem};

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::NativeFileSystem;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemoryFileSystem;

#[cfg(feature = "native")]
pub use NativeFileSystem as DefaultFileSystem;

#[cfg(all(not(feature = "native"), feature = "memory"))]
pub use MemoryFileSystem as DefaultFileSystem;
