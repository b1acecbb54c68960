//! Specifier resolvers.
//!
//! Every resolver answers two questions: whether it handles a raw specifier
//! (`can_resolve`) and where that specifier lives (`resolve`). Package
//! resolvers find files by walking up from a root directory looking for
//! `node_modules`; the chain composes them with a local catch-all.

mod chain;
mod jsr;
mod local;
mod npm;
mod walk;

pub use chain::ChainResolver;
pub use jsr::{npm_compat_name, JsrCompatResolver, JsrStubResolver, JSR_COMPAT_SCOPE};
pub use local::LocalResolver;
pub use npm::NpmResolver;
pub use walk::{walk_up, NODE_MODULES};

use crate::error::ResolveError;
use crate::specifier::{Specifier, SpecifierKind};
use serde::Serialize;
use std::path::PathBuf;

/// A specifier resolved to a filesystem location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    /// Original specifier.
    pub specifier: String,
    /// Resolved path (absolute for package specifiers).
    pub path: PathBuf,
    /// Kind of the original specifier.
    pub kind: SpecifierKind,
}

impl ResolvedFile {
    /// Create a resolved file, deriving the kind from the specifier.
    pub fn new(specifier: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let specifier = specifier.into();
        let kind = Specifier::parse(&specifier).kind;
        Self {
            specifier,
            path: path.into(),
            kind,
        }
    }
}

/// Resolver capability.
pub trait Resolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Cheap, side-effect free check whether this resolver handles `raw`.
    fn can_resolve(&self, raw: &str) -> bool;

    /// Resolve `raw` to a file location.
    fn resolve(&self, raw: &str) -> Result<ResolvedFile, ResolveError>;
}

/// Reject a parsed specifier whose kind does not match the resolver.
fn expect_kind(spec: &Specifier, expected: SpecifierKind) -> Result<(), ResolveError> {
    if spec.kind == expected {
        Ok(())
    } else {
        Err(ResolveError::SpecifierMismatch {
            specifier: spec.raw.clone(),
            expected: expected.as_str(),
            actual: spec.kind.as_str(),
        })
    }
}
