//! Recognized dependency-management tools and version-control systems

use crate::{Error, Result};
use depscope_fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What kind of filesystem entry a marker must be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A regular file
    File,
    /// A directory
    Dir,
    /// Either
    Any,
}

/// A path whose presence identifies a tool or VCS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Path relative to the candidate directory, `/`-separated
    pub path: &'static str,
    /// Required entry kind
    pub kind: MarkerKind,
}

impl Marker {
    const fn file(path: &'static str) -> Self {
        Self {
            path,
            kind: MarkerKind::File,
        }
    }

    const fn dir(path: &'static str) -> Self {
        Self {
            path,
            kind: MarkerKind::Dir,
        }
    }

    const fn any(path: &'static str) -> Self {
        Self {
            path,
            kind: MarkerKind::Any,
        }
    }

    /// Absolute location of this marker inside `dir`
    pub fn location(&self, dir: &Path) -> PathBuf {
        self.path.split('/').fold(dir.to_path_buf(), |acc, segment| acc.join(segment))
    }

    /// Check whether the marker is present in `dir`
    ///
    /// # Errors
    /// Returns `Error::Io` if the existence check fails
    pub fn is_present<F: FileSystem + ?Sized>(&self, fs: &F, dir: &Path) -> Result<bool> {
        let location = self.location(dir);
        let meta = fs
            .metadata(&location)
            .map_err(|e| Error::io(&location, e))?;
        Ok(match self.kind {
            MarkerKind::File => meta.is_file,
            MarkerKind::Dir => meta.is_dir,
            MarkerKind::Any => meta.exists,
        })
    }
}

/// Dependency-management tool governing a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// No recognized manifest
    #[default]
    None,
    /// Go modules (`go.mod`)
    Gomodules,
    /// dep (`Gopkg.toml`)
    Dep,
    /// godep (`Godeps/Godeps.json`)
    Godep,
    /// govendor (`vendor/vendor.json`)
    Govendor,
    /// glide (`glide.yaml`)
    Glide,
    /// vndr (`vendor.conf`)
    Vndr,
    /// gdm (`Godeps` file)
    Gdm,
}

impl Tool {
    /// Order in which tools are tested at a single directory level
    pub const DEFAULT_PRIORITY: [Tool; 7] = [
        Tool::Gomodules,
        Tool::Dep,
        Tool::Godep,
        Tool::Govendor,
        Tool::Glide,
        Tool::Vndr,
        Tool::Gdm,
    ];

    /// Lowercase tool name
    pub fn name(self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Gomodules => "gomodules",
            Tool::Dep => "dep",
            Tool::Godep => "godep",
            Tool::Govendor => "govendor",
            Tool::Glide => "glide",
            Tool::Vndr => "vndr",
            Tool::Gdm => "gdm",
        }
    }

    /// Manifest markers identifying this tool
    pub fn markers(self) -> &'static [Marker] {
        const GOMODULES: &[Marker] = &[Marker::file("go.mod")];
        const DEP: &[Marker] = &[Marker::file("Gopkg.toml")];
        const GODEP: &[Marker] = &[Marker::file("Godeps/Godeps.json")];
        const GOVENDOR: &[Marker] = &[Marker::file("vendor/vendor.json")];
        const GLIDE: &[Marker] = &[Marker::file("glide.yaml")];
        const VNDR: &[Marker] = &[Marker::file("vendor.conf")];
        const GDM: &[Marker] = &[Marker::file("Godeps")];

        match self {
            Tool::None => &[],
            Tool::Gomodules => GOMODULES,
            Tool::Dep => DEP,
            Tool::Godep => GODEP,
            Tool::Govendor => GOVENDOR,
            Tool::Glide => GLIDE,
            Tool::Vndr => VNDR,
            Tool::Gdm => GDM,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        std::iter::once(Tool::None)
            .chain(Tool::DEFAULT_PRIORITY)
            .find(|tool| tool.name() == s)
            .ok_or_else(|| Error::Config(format!("unknown tool '{}'", s)))
    }
}

/// Recognized version-control systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcs {
    /// Git (`.git` directory, or `.git` file in worktrees and submodules)
    Git,
    /// Subversion (`.svn`)
    Subversion,
    /// Mercurial (`.hg`)
    Mercurial,
    /// Bazaar (`.bzr`)
    Bazaar,
}

impl Vcs {
    /// Order in which systems are tested at a single directory level
    pub const ALL: [Vcs; 4] = [Vcs::Git, Vcs::Subversion, Vcs::Mercurial, Vcs::Bazaar];

    /// Root marker for this system
    pub fn marker(self) -> Marker {
        match self {
            Vcs::Git => Marker::any(".git"),
            Vcs::Subversion => Marker::dir(".svn"),
            Vcs::Mercurial => Marker::dir(".hg"),
            Vcs::Bazaar => Marker::dir(".bzr"),
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vcs::Git => "git",
            Vcs::Subversion => "svn",
            Vcs::Mercurial => "hg",
            Vcs::Bazaar => "bzr",
        })
    }
}
