//! Version of the crate and of the CLI's JSON output.

use serde::Serialize;

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `schema_version` field in every JSON document `pkgref`
/// prints (`parse`, `resolve`, `cdn`, `version`).
///
/// Adding a field keeps the number; renaming or removing one, or changing
/// the meaning of `ok`/`error.code`, bumps it.
pub const OUTPUT_SCHEMA_VERSION: u32 = 1;

/// Version report for `pkgref version --json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub schema_version: u32,
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            schema_version: OUTPUT_SCHEMA_VERSION,
            name: "pkgref",
            version: VERSION,
        }
    }
}

/// One-line version banner, e.g. `pkgref 0.1.0 (output schema 1)`.
#[must_use]
pub fn version_string() -> String {
    let info = VersionInfo::current();
    format!(
        "{} {} (output schema {})",
        info.name, info.version, info.schema_version
    )
}
