//! Package specifier parsing.
//!
//! Parses specifiers like:
//! - `npm:lodash/package.json`
//! - `npm:@rhds/tokens/json/rhds.tokens.json`
//! - `npm:@scope/pkg@1.2.3/tokens.json`
//! - `jsr:@std/path/mod.ts`
//! - `./tokens.json`, `/abs/tokens.json` (local)
//!
//! Parsing is total: anything that does not match the npm or jsr grammar
//! is a local path.

use serde::Serialize;
use std::fmt;

/// Prefix for npm specifiers.
pub const NPM_PREFIX: &str = "npm:";

/// Prefix for JSR specifiers.
pub const JSR_PREFIX: &str = "jsr:";

/// Specifier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    Local,
    Npm,
    Jsr,
}

impl SpecifierKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Npm => "npm",
            Self::Jsr => "jsr",
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specifier {
    /// Classification.
    pub kind: SpecifierKind,
    /// Package name with optional scope and version (empty for local).
    pub package: String,
    /// File inside the package, or the raw path for local specifiers.
    pub file: String,
    /// Original input.
    pub raw: String,
}

impl Specifier {
    /// Parse a raw specifier string. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(NPM_PREFIX) {
            if let Some((package, file)) = split_package(rest, false) {
                return Self::from_package(SpecifierKind::Npm, package, file, raw);
            }
        } else if let Some(rest) = raw.strip_prefix(JSR_PREFIX) {
            // JSR packages are always scoped
            if let Some((package, file)) = split_package(rest, true) {
                return Self::from_package(SpecifierKind::Jsr, package, file, raw);
            }
        }

        Self::local(raw)
    }

    fn from_package(kind: SpecifierKind, package: &str, file: &str, raw: &str) -> Self {
        Self {
            kind,
            package: package.to_string(),
            file: file.trim_start_matches('/').to_string(),
            raw: raw.to_string(),
        }
    }

    fn local(raw: &str) -> Self {
        Self {
            kind: SpecifierKind::Local,
            package: String::new(),
            file: raw.to_string(),
            raw: raw.to_string(),
        }
    }

    #[must_use]
    pub fn is_package(&self) -> bool {
        self.kind != SpecifierKind::Local
    }

    #[must_use]
    pub fn is_npm(&self) -> bool {
        self.kind == SpecifierKind::Npm
    }

    #[must_use]
    pub fn is_jsr(&self) -> bool {
        self.kind == SpecifierKind::Jsr
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.kind == SpecifierKind::Local
    }

    /// Whether a package specifier selects a concrete file.
    #[must_use]
    pub fn has_file(&self) -> bool {
        !self.file.is_empty()
    }

    /// Scope without the `@` prefix, if scoped.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        let rest = self.package.strip_prefix('@')?;
        rest.split_once('/').map(|(scope, _)| scope)
    }

    /// Package name without the version suffix.
    ///
    /// For `@scope/pkg@1.2.3`, returns `@scope/pkg`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.version_at() {
            Some(at) => &self.package[..at],
            None => &self.package,
        }
    }

    /// Version suffix, if the package carries one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version_at().map(|at| &self.package[at + 1..])
    }

    /// Byte offset of the `@` separating name and version.
    fn version_at(&self) -> Option<usize> {
        // Skip the scope marker so `@scope/pkg` is not mistaken for a version
        let offset = usize::from(self.package.starts_with('@'));
        self.package[offset..]
            .find('@')
            .map(|pos| pos + offset)
            .filter(|&at| at + 1 < self.package.len())
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split the text after the prefix into package name and remainder.
///
/// Returns `None` if the package-name pattern does not match.
fn split_package(rest: &str, require_scope: bool) -> Option<(&str, &str)> {
    if rest.starts_with('@') {
        // Scoped package: @scope/pkg or @scope/pkg/file
        let (scope, after_scope) = rest[1..].split_once('/')?;
        if scope.is_empty() {
            return None;
        }

        let name_len = after_scope.find('/').unwrap_or(after_scope.len());
        if name_len == 0 {
            return None;
        }

        // '@' + scope + '/' + name
        let end = 1 + scope.len() + 1 + name_len;
        return Some((&rest[..end], &rest[end..]));
    }

    if require_scope {
        return None;
    }

    // Regular package: pkg or pkg/file
    let end = rest.find('/').unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((&rest[..end], &rest[end..]))
}

/// Parse a raw specifier string.
#[must_use]
pub fn parse(raw: &str) -> Specifier {
    Specifier::parse(raw)
}

/// Check whether a string is an npm or jsr package specifier.
#[must_use]
pub fn is_package_specifier(raw: &str) -> bool {
    Specifier::parse(raw).is_package()
}

#[must_use]
pub fn is_npm(raw: &str) -> bool {
    Specifier::parse(raw).is_npm()
}

#[must_use]
pub fn is_jsr(raw: &str) -> bool {
    Specifier::parse(raw).is_jsr()
}

#[must_use]
pub fn is_local(raw: &str) -> bool {
    Specifier::parse(raw).is_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_npm_scoped_with_file() {
        let spec = Specifier::parse("npm:@rhds/tokens/json/rhds.tokens.json");
        assert_eq!(spec.kind, SpecifierKind::Npm);
        assert_eq!(spec.package, "@rhds/tokens");
        assert_eq!(spec.file, "json/rhds.tokens.json");
        assert_eq!(spec.raw, "npm:@rhds/tokens/json/rhds.tokens.json");
    }

    #[test]
    fn test_parse_npm_unscoped_with_file() {
        let spec = Specifier::parse("npm:lodash/package.json");
        assert_eq!(spec.kind, SpecifierKind::Npm);
        assert_eq!(spec.package, "lodash");
        assert_eq!(spec.file, "package.json");
    }

    #[test]
    fn test_parse_npm_without_file() {
        let spec = Specifier::parse("npm:@scope/pkg");
        assert_eq!(spec.kind, SpecifierKind::Npm);
        assert_eq!(spec.package, "@scope/pkg");
        assert_eq!(spec.file, "");
        assert!(!spec.has_file());

        let spec = Specifier::parse("npm:lodash/");
        assert_eq!(spec.kind, SpecifierKind::Npm);
        assert_eq!(spec.package, "lodash");
        assert_eq!(spec.file, "");
    }

    #[test]
    fn test_parse_npm_versioned() {
        let spec = Specifier::parse("npm:@scope/pkg@1.2.3/tokens.json");
        assert_eq!(spec.package, "@scope/pkg@1.2.3");
        assert_eq!(spec.file, "tokens.json");
        assert_eq!(spec.name(), "@scope/pkg");
        assert_eq!(spec.version(), Some("1.2.3"));
        assert_eq!(spec.scope(), Some("scope"));

        let spec = Specifier::parse("npm:lodash@4/fp.js");
        assert_eq!(spec.name(), "lodash");
        assert_eq!(spec.version(), Some("4"));
        assert_eq!(spec.scope(), None);
    }

    #[test]
    fn test_unversioned_package_has_no_version() {
        let spec = Specifier::parse("npm:@scope/pkg/a.json");
        assert_eq!(spec.name(), "@scope/pkg");
        assert_eq!(spec.version(), None);
    }

    #[test]
    fn test_parse_npm_strips_extra_leading_slashes() {
        let spec = Specifier::parse("npm:pkg//a.json");
        assert_eq!(spec.file, "a.json");
    }

    #[test]
    fn test_parse_jsr_scoped() {
        let spec = Specifier::parse("jsr:@std/path/mod.ts");
        assert_eq!(spec.kind, SpecifierKind::Jsr);
        assert_eq!(spec.package, "@std/path");
        assert_eq!(spec.file, "mod.ts");
    }

    #[test]
    fn test_parse_jsr_unscoped_is_local() {
        let spec = Specifier::parse("jsr:tokens/colors.json");
        assert_eq!(spec.kind, SpecifierKind::Local);
        assert_eq!(spec.package, "");
        assert_eq!(spec.file, "jsr:tokens/colors.json");
    }

    #[test]
    fn test_parse_malformed_package_is_local() {
        for raw in ["npm:", "npm:/file.json", "npm:@/pkg/a", "npm:@scope", "npm:@scope/", "jsr:@scope"] {
            let spec = Specifier::parse(raw);
            assert_eq!(spec.kind, SpecifierKind::Local, "{raw} should be local");
            assert_eq!(spec.file, raw);
            assert!(spec.package.is_empty());
        }
    }

    #[test]
    fn test_parse_local_paths() {
        for raw in ["./tokens.json", "../a/b.json", "/abs/tokens.json", "tokens.json", ""] {
            let spec = Specifier::parse(raw);
            assert_eq!(spec.kind, SpecifierKind::Local);
            assert_eq!(spec.file, raw);
            assert_eq!(spec.raw, raw);
        }
    }

    #[test]
    fn test_package_file_round_trip() {
        let cases = [
            ("lodash", "fp/index.js"),
            ("@scope/pkg", "tokens.json"),
            ("@scope/pkg@2.0.0", "deep/nested/file.json"),
            ("pkg@next", "a"),
        ];
        for (pkg, file) in cases {
            let spec = Specifier::parse(&format!("npm:{pkg}/{file}"));
            assert_eq!(spec.package, pkg);
            assert_eq!(spec.file, file);
        }
    }

    #[test]
    fn test_jsr_unscoped_never_jsr() {
        for name in ["tokens", "std", "pkg@1.0.0"] {
            let raw = format!("jsr:{name}/file.json");
            assert_eq!(Specifier::parse(&raw).kind, SpecifierKind::Local);
        }
    }

    #[test]
    fn test_is_package_specifier_consistency() {
        let inputs = [
            "npm:a/b",
            "npm:@a/b/c",
            "jsr:@a/b/c",
            "jsr:a/b",
            "npm:",
            "./local.json",
            "/abs",
            "npm:@scope/pkg",
        ];
        for raw in inputs {
            assert_eq!(
                is_package_specifier(raw),
                parse(raw).kind != SpecifierKind::Local,
                "{raw}"
            );
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(is_npm("npm:a/b"));
        assert!(!is_jsr("npm:a/b"));
        assert!(is_jsr("jsr:@a/b/c"));
        assert!(is_local("jsr:a/b"));
        assert!(is_local("./x"));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let spec = Specifier::parse("jsr:@std/path/mod.ts");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "jsr");
        assert_eq!(json["package"], "@std/path");
    }
}
