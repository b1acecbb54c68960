use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pkgref operations outside of resolution.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown CDN provider '{0}' (expected one of: unpkg, esm.sh, esm.run, jspm, jsdelivr)")]
    UnknownProvider(String),

    #[error("Unknown JSR mode '{0}' (expected 'compat' or 'stub')")]
    UnknownJsrMode(String),
}

/// Stable resolution error codes.
pub mod codes {
    pub const PACKAGE_NOT_FOUND: &str = "PACKAGE_NOT_FOUND";
    pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
    pub const INVALID_ROOT: &str = "INVALID_ROOT";
    pub const PATH_TRAVERSAL: &str = "PATH_TRAVERSAL";
    pub const NO_RESOLVER_MATCHED: &str = "NO_RESOLVER_MATCHED";
    pub const SPECIFIER_MISMATCH: &str = "SPECIFIER_MISMATCH";
}

/// Error returned by a resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The walk-up reached the filesystem root, or the specifier selects no file.
    #[error("package not found: {package} (file '{file}', searched from {start})")]
    PackageNotFound {
        specifier: String,
        package: String,
        file: String,
        start: PathBuf,
    },

    /// The resolver has no backing implementation.
    #[error("{what} is not implemented: {specifier}")]
    NotImplemented {
        specifier: String,
        what: &'static str,
    },

    /// The resolver requires an absolute root directory.
    #[error("root directory must be absolute: {root}")]
    InvalidRoot { root: PathBuf },

    /// A candidate path escapes its `node_modules` directory.
    #[error("path traversal in {specifier}: {candidate} escapes {base}")]
    PathTraversal {
        specifier: String,
        candidate: PathBuf,
        base: PathBuf,
    },

    /// No resolver in the chain claims the specifier.
    #[error("no resolver found for {specifier}")]
    NoResolverMatched { specifier: String },

    /// A resolver was handed a specifier of a kind it does not handle.
    #[error("expected a {expected} specifier, got {actual}: {specifier}")]
    SpecifierMismatch {
        specifier: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ResolveError {
    /// Get the stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PackageNotFound { .. } => codes::PACKAGE_NOT_FOUND,
            Self::NotImplemented { .. } => codes::NOT_IMPLEMENTED,
            Self::InvalidRoot { .. } => codes::INVALID_ROOT,
            Self::PathTraversal { .. } => codes::PATH_TRAVERSAL,
            Self::NoResolverMatched { .. } => codes::NO_RESOLVER_MATCHED,
            Self::SpecifierMismatch { .. } => codes::SPECIFIER_MISMATCH,
        }
    }
}
