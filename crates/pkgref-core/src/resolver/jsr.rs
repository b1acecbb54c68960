//! JSR resolvers.
//!
//! npm-compatible installers put JSR packages under the `@jsr` scope with
//! the original scope folded into the name: `@std/path` is installed as
//! `node_modules/@jsr/std__path`.

use super::walk::walk_up;
use super::{expect_kind, ResolvedFile, Resolver};
use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::specifier::{Specifier, SpecifierKind, JSR_PREFIX};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Scope directory used by the npm compatibility layer.
pub const JSR_COMPAT_SCOPE: &str = "@jsr";

/// Translate a JSR package name into its npm-compat name.
///
/// `@scope/pkg` becomes `scope__pkg`; an unscoped name is unchanged.
#[must_use]
pub fn npm_compat_name(package: &str) -> String {
    let name = package.strip_prefix('@').unwrap_or(package);
    name.replacen('/', "__", 1)
}

/// Resolves `jsr:` specifiers through `node_modules/@jsr/<scope>__<name>/<file>`.
#[derive(Clone)]
pub struct JsrCompatResolver {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl JsrCompatResolver {
    /// Create a resolver that walks up from `root`.
    ///
    /// # Errors
    /// Returns `InvalidRoot` if `root` is not absolute.
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>) -> Result<Self, ResolveError> {
        let root = root.into();
        if !root.is_absolute() {
            return Err(ResolveError::InvalidRoot { root });
        }
        Ok(Self { fs, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Debug for JsrCompatResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsrCompatResolver")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Resolver for JsrCompatResolver {
    fn name(&self) -> &'static str {
        "jsr-compat"
    }

    fn can_resolve(&self, raw: &str) -> bool {
        raw.starts_with(JSR_PREFIX) && Specifier::parse(raw).is_jsr()
    }

    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError> {
        let spec = Specifier::parse(raw);
        expect_kind(&spec, SpecifierKind::Jsr)?;

        let package_dir = Path::new(JSR_COMPAT_SCOPE).join(npm_compat_name(&spec.package));
        trace!(package = %spec.package, dir = %package_dir.display(), "Translated jsr package");

        let path = walk_up(self.fs.as_ref(), &self.root, &package_dir, &spec)?;
        Ok(ResolvedFile::new(raw, path))
    }
}

/// JSR resolver used when no registry integration is configured.
///
/// Claims scoped `jsr:` specifiers and always fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsrStubResolver;

impl JsrStubResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for JsrStubResolver {
    fn name(&self) -> &'static str {
        "jsr-stub"
    }

    fn can_resolve(&self, raw: &str) -> bool {
        raw.starts_with(JSR_PREFIX) && Specifier::parse(raw).is_jsr()
    }

    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError> {
        Err(ResolveError::NotImplemented {
            specifier: raw.to_string(),
            what: "JSR registry resolution",
        })
    }
}
