//! Nearest version-control root lookup

use crate::{Error, Result, Vcs};
use depscope_fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Find the nearest version-control root at or above `start`
///
/// # Errors
/// Returns `Error::NoVcsRoot` if the filesystem root is reached without a
/// match, or `Error::Io` if an existence check fails
pub fn nearest_vcs<F: FileSystem + ?Sized>(fs: &F, start: &Path) -> Result<(Vcs, PathBuf)> {
    for dir in start.ancestors() {
        trace!(dir = %dir.display(), "checking for VCS root");
        for vcs in Vcs::ALL {
            if vcs.marker().is_present(fs, dir)? {
                return Ok((vcs, dir.to_path_buf()));
            }
        }
    }

    Err(Error::NoVcsRoot {
        dir: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use depscope_fs::MemoryFileSystem;

    #[test]
    fn test_finds_repository_root_above_package() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/github.com/acme/tool/.git").unwrap();
        fs.add_dir("/ws/src/github.com/acme/tool/cmd/tool").unwrap();

        let (vcs, root) =
            nearest_vcs(&fs, Path::new("/ws/src/github.com/acme/tool/cmd/tool")).unwrap();
        assert_eq!(vcs, Vcs::Git);
        assert_eq!(root, PathBuf::from("/ws/src/github.com/acme/tool"));
    }

    #[test]
    fn test_git_file_counts_as_root() {
        // Submodules and worktrees have a `.git` file
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/sub/.git").unwrap();

        let (vcs, root) = nearest_vcs(&fs, Path::new("/repo/sub")).unwrap();
        assert_eq!(vcs, Vcs::Git);
        assert_eq!(root, PathBuf::from("/repo/sub"));
    }

    #[test]
    fn test_other_systems() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/svn/.svn").unwrap();
        fs.add_dir("/hg/.hg").unwrap();
        fs.add_dir("/bzr/.bzr").unwrap();

        assert_eq!(nearest_vcs(&fs, Path::new("/svn")).unwrap().0, Vcs::Subversion);
        assert_eq!(nearest_vcs(&fs, Path::new("/hg")).unwrap().0, Vcs::Mercurial);
        assert_eq!(nearest_vcs(&fs, Path::new("/bzr")).unwrap().0, Vcs::Bazaar);
    }

    #[test]
    fn test_svn_file_is_not_a_root() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/proj/.svn").unwrap();

        assert!(nearest_vcs(&fs, Path::new("/proj")).is_err());
    }

    #[test]
    fn test_nearest_root_wins() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/.git").unwrap();
        fs.add_dir("/ws/src/proj/.hg").unwrap();

        let (vcs, root) = nearest_vcs(&fs, Path::new("/ws/src/proj")).unwrap();
        assert_eq!(vcs, Vcs::Mercurial);
        assert_eq!(root, PathBuf::from("/ws/src/proj"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/src/proj").unwrap();

        let err = nearest_vcs(&fs, Path::new("/ws/src/proj")).unwrap_err();
        assert!(matches!(err, Error::NoVcsRoot { dir } if dir == Path::new("/ws/src/proj")));
    }
}
