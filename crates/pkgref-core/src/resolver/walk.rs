//! `node_modules` walk-up shared by the package resolvers.

use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::specifier::Specifier;
use pkgref_util::path::{absolutize, is_strictly_within, normalize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the package installation directory.
pub const NODE_MODULES: &str = "node_modules";

/// Make the walk-up start directory absolute, once, against the process cwd.
fn absolute_start(root: &Path) -> Result<PathBuf, ResolveError> {
    if root.is_absolute() {
        return Ok(normalize(root));
    }

    let cwd = std::env::current_dir().map_err(|_| ResolveError::InvalidRoot {
        root: root.to_path_buf(),
    })?;
    Ok(absolutize(root, &cwd))
}

/// Search `root` and each ancestor for `node_modules/<package_dir>/<file>`.
///
/// A relative `root` is made absolute against the process working directory
/// before the walk; errors report `root` as given. Every candidate is checked
/// to stay strictly inside its `node_modules` directory before the filesystem
/// is consulted, and must name something below the package directory.
///
/// # Errors
/// - `PackageNotFound` if the specifier selects no file or no ancestor holds it.
/// - `PathTraversal` if a candidate escapes `node_modules`.
/// - `InvalidRoot` if `root` is relative and the working directory is unknown.
pub fn walk_up(
    fs: &dyn FileSystem,
    root: &Path,
    package_dir: &Path,
    spec: &Specifier,
) -> Result<PathBuf, ResolveError> {
    let not_found = || ResolveError::PackageNotFound {
        specifier: spec.raw.clone(),
        package: spec.package.clone(),
        file: spec.file.clone(),
        start: root.to_path_buf(),
    };

    if !spec.has_file() {
        return Err(not_found());
    }

    let start = absolute_start(root)?;
    let mut dir = start.as_path();

    loop {
        let node_modules = dir.join(NODE_MODULES);
        let package_root = normalize(&node_modules.join(package_dir));
        let candidate = normalize(&package_root.join(&spec.file));

        if !is_strictly_within(&candidate, &node_modules) {
            return Err(ResolveError::PathTraversal {
                specifier: spec.raw.clone(),
                candidate,
                base: node_modules,
            });
        }

        // `pkg/.` or `@scope/pkg/..` name a directory, not a file in the package
        if package_root.starts_with(&candidate) {
            debug!(candidate = %candidate.display(), "File selects no path inside the package");
            return Err(not_found());
        }

        debug!(candidate = %candidate.display(), "Checking candidate");

        if fs.exists(&candidate) {
            debug!(path = %candidate.display(), "Resolved");
            return Ok(candidate);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    debug!(specifier = %spec.raw, root = %root.display(), "Package not found");
    Err(not_found())
}
