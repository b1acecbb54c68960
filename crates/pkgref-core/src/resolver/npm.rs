use super::walk::walk_up;
use super::{expect_kind, ResolvedFile, Resolver};
use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::specifier::{Specifier, SpecifierKind, NPM_PREFIX};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Resolves `npm:` specifiers against `node_modules/<package>/<file>`.
#[derive(Clone)]
pub struct NpmResolver {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl NpmResolver {
    /// Create a resolver that walks up from `root`.
    ///
    /// A relative `root` is made absolute against the process working
    /// directory at resolution time.
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Debug for NpmResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NpmResolver")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Resolver for NpmResolver {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn can_resolve(&self, raw: &str) -> bool {
        // A malformed `npm:` string parses as local and belongs to the local resolver
        raw.starts_with(NPM_PREFIX) && Specifier::parse(raw).is_npm()
    }

    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError> {
        let spec = Specifier::parse(raw);
        expect_kind(&spec, SpecifierKind::Npm)?;
        trace!(package = %spec.package, file = %spec.file, "Parsed npm specifier");

        let path = walk_up(self.fs.as_ref(), &self.root, Path::new(&spec.package), &spec)?;
        Ok(ResolvedFile::new(raw, path))
    }
}
