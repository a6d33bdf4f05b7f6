//! Nearest dependency manifest lookup

use crate::{Result, Tool};
use depscope_fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Find the nearest directory holding a recognized dependency manifest
///
/// Walks up from `start` (inclusive) to the filesystem root. The first
/// directory containing any marker wins; within that directory the first
/// tool in `priority` whose marker is present is returned.
///
/// Not finding anything is `Ok(None)`, not an error.
///
/// # Errors
/// Returns `Error::Io` if an existence check fails
pub fn nearest_lockfile<F: FileSystem + ?Sized>(
    fs: &F,
    start: &Path,
    priority: &[Tool],
) -> Result<Option<(Tool, PathBuf)>> {
    for dir in start.ancestors() {
        trace!(dir = %dir.display(), "checking for manifests");
        if let Some(tool) = tool_at(fs, dir, priority)? {
            return Ok(Some((tool, dir.to_path_buf())));
        }
    }

    Ok(None)
}

/// First tool in `priority` with a marker directly inside `dir`
fn tool_at<F: FileSystem + ?Sized>(fs: &F, dir: &Path, priority: &[Tool]) -> Result<Option<Tool>> {
    for &tool in priority {
        for marker in tool.markers() {
            if marker.is_present(fs, dir)? {
                return Ok(Some(tool));
            }
        }
    }

    Ok(None)
}
