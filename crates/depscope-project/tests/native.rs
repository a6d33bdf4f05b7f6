//! End-to-end resolution against a real directory tree
//!
//! These tests build a `$GOPATH` layout in a temporary directory and resolve
//! packages through `NativeFileSystem`.

use depscope_fs::NativeFileSystem;
use depscope_project::{Error, GopathLocator, ProjectResolver, ResolverConfig, Tool};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn gopath() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src")).unwrap();
    temp_dir
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn mkdir(root: &Path, relative: &str) {
    fs::create_dir_all(root.join(relative)).unwrap();
}

fn resolver(root: &Path) -> ProjectResolver<NativeFileSystem, GopathLocator<NativeFileSystem>> {
    ProjectResolver::gopath(Arc::new(NativeFileSystem::new()), ResolverConfig::new(root)).unwrap()
}

#[test]
fn test_dep_project_on_disk() {
    let ws = gopath();
    let root = ws.path();
    mkdir(root, "src/github.com/acme/tool/.git");
    touch(root, "src/github.com/acme/tool/Gopkg.toml");
    touch(root, "src/github.com/acme/tool/Gopkg.lock");

    let project = resolver(root).resolve("github.com/acme/tool").unwrap();
    assert_eq!(project.tool, Tool::Dep);
    assert_eq!(
        project.manifest.as_deref(),
        Some(root.join("src/github.com/acme/tool").as_path())
    );
    assert_eq!(project.dir, root.join("src/github.com/acme/tool"));
    assert_eq!(project.import_path, "github.com/acme/tool");
}

#[test]
fn test_godep_and_gdm_markers_on_disk() {
    let ws = gopath();
    let root = ws.path();
    mkdir(root, "src/godep/.git");
    touch(root, "src/godep/Godeps/Godeps.json");
    mkdir(root, "src/gdm/.git");
    touch(root, "src/gdm/Godeps");

    let resolver = resolver(root);
    assert_eq!(resolver.resolve("godep").unwrap().tool, Tool::Godep);
    // `Godeps` is a file here; looking for `Godeps/Godeps.json` must not error
    assert_eq!(resolver.resolve("gdm").unwrap().tool, Tool::Gdm);
}

#[test]
fn test_vendored_package_on_disk() {
    let ws = gopath();
    let root = ws.path();
    mkdir(root, ".git");
    touch(root, "src/proj/glide.yaml");
    mkdir(root, "src/proj/vendor/github.com/x/y/pkg");

    let project = resolver(root)
        .resolve("proj/vendor/github.com/x/y/pkg")
        .unwrap();
    assert_eq!(project.dir, root.join("src/proj"));
    assert_eq!(project.import_path, "proj");
    assert_eq!(project.tool, Tool::Glide);
}

#[test]
fn test_missing_package_on_disk() {
    let ws = gopath();
    let err = resolver(ws.path()).resolve("github.com/nobody/nothing").unwrap_err();
    assert!(matches!(err.root_cause(), Error::PackageNotFound { .. }));
}

#[test]
fn test_json_report_shape() {
    let ws = gopath();
    let root = ws.path();
    mkdir(root, "src/proj/.git");
    touch(root, "src/proj/go.mod");

    let project = resolver(root).resolve("proj").unwrap();
    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["tool"], "gomodules");
    assert_eq!(json["import_path"], "proj");
    assert!(json["manifest"].is_string());
}
