use super::{
    JsrCompatResolver, JsrStubResolver, LocalResolver, NpmResolver, ResolvedFile, Resolver,
};
use crate::config::JsrMode;
use crate::error::ResolveError;
use crate::fs::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Ordered composition of resolvers.
///
/// The first resolver that claims a specifier resolves it, and its result
/// is final: a failure is returned as is, never retried on later resolvers.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ChainResolver {
    /// Create a chain from resolvers in priority order.
    #[must_use]
    pub fn new(resolvers: Vec<Box<dyn Resolver>>) -> Self {
        Self { resolvers }
    }

    /// Build the default chain: npm, then jsr, then the local catch-all.
    ///
    /// # Errors
    /// Returns `InvalidRoot` if `jsr` is `Compat` and `root` is not absolute.
    pub fn with_defaults(
        fs: Arc<dyn FileSystem>,
        root: impl Into<PathBuf>,
        jsr: JsrMode,
    ) -> Result<Self, ResolveError> {
        let root = root.into();
        let jsr_resolver: Box<dyn Resolver> = match jsr {
            JsrMode::Compat => Box::new(JsrCompatResolver::new(Arc::clone(&fs), root.clone())?),
            JsrMode::Stub => Box::new(JsrStubResolver::new()),
        };

        Ok(Self::new(vec![
            Box::new(NpmResolver::new(fs, root)),
            jsr_resolver,
            Box::new(LocalResolver::new()),
        ]))
    }

    /// Append a resolver with the lowest priority.
    pub fn push(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Names of the member resolvers, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl std::fmt::Debug for ChainResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainResolver")
            .field("resolvers", &self.names())
            .finish()
    }
}

impl Resolver for ChainResolver {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn can_resolve(&self, raw: &str) -> bool {
        self.resolvers.iter().any(|r| r.can_resolve(raw))
    }

    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError> {
        let Some(resolver) = self.resolvers.iter().find(|r| r.can_resolve(raw)) else {
            return Err(ResolveError::NoResolverMatched {
                specifier: raw.to_string(),
            });
        };

        debug!(specifier = raw, resolver = resolver.name(), "Selected resolver");
        resolver.resolve(raw)
    }
}
