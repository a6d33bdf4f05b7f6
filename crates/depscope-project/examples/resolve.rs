//! Example: resolve the projects of the packages named on the command line
//!
//! ```text
//! GOPATH=$HOME/go RUST_LOG=depscope_project=debug \
//!     cargo run --example resolve -- github.com/acme/tool github.com/acme/tool/cmd/tool
//! ```
//!
//! Pass `--config path/to/depscope.toml` first to read the workspace root and
//! lockfile priority from a file instead of `$GOPATH`.

use anyhow::{Context, Result};
use depscope_fs::NativeFileSystem;
use depscope_project::{ProjectResolver, ResolverConfig};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, packages) = match args.as_slice() {
        [flag, path, rest @ ..] if flag == "--config" => (
            ResolverConfig::load_from(Path::new(path))
                .with_context(|| format!("Failed to load {}", path))?,
            rest,
        ),
        _ => (
            ResolverConfig::from_env().context("Failed to read $GOPATH")?,
            args.as_slice(),
        ),
    };

    let resolver = ProjectResolver::gopath(Arc::new(NativeFileSystem::new()), config)
        .context("Workspace root is required")?;

    for package in packages {
        match resolver.resolve(package) {
            Ok(project) => println!("{}", serde_json::to_string(&project)?),
            Err(e) => eprintln!("{}: {}", package, e),
        }
    }

    println!("\n{} package(s) in {} project(s):", resolver.len(), resolver.projects().len());
    for project in resolver.projects() {
        println!("  {} [{}] {}", project.import_path, project.tool, project.dir.display());
    }

    Ok(())
}
