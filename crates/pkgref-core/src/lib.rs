#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

//! Package specifier parsing and resolution.
//!
//! Resolves `npm:` and `jsr:` specifiers to files inside installed
//! packages by walking up for `node_modules`, passes local paths through,
//! and builds CDN URLs for package files.

pub mod cdn;
pub mod config;
pub mod error;
pub mod fs;
pub mod resolver;
pub mod specifier;
pub mod version;

pub use cdn::{cdn_url, CdnProvider};
pub use config::{Config, JsrMode};
pub use error::{Error, ResolveError};
pub use fs::{FileSystem, MemoryFs, OsFs};
pub use resolver::{
    ChainResolver, JsrCompatResolver, JsrStubResolver, LocalResolver, NpmResolver, ResolvedFile,
    Resolver,
};
pub use specifier::{is_package_specifier, Specifier, SpecifierKind};
pub use version::VERSION;
