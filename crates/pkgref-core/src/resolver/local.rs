use super::{ResolvedFile, Resolver};
use crate::error::ResolveError;
use crate::specifier::is_package_specifier;

/// Passthrough resolver for plain filesystem paths.
///
/// Claims every specifier that is not an npm or jsr package and returns it
/// unchanged. Existence is left to whoever reads the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResolver;

impl LocalResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for LocalResolver {
    fn name(&self) -> &'static str {
        "local"
    }

    fn can_resolve(&self, raw: &str) -> bool {
        !is_package_specifier(raw)
    }

    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError> {
        Ok(ResolvedFile::new(raw, raw))
    }
}
