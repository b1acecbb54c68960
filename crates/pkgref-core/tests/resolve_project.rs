//! Resolution against real on-disk projects.

use pkgref_core::error::codes;
use pkgref_core::{cdn_url, ChainResolver, CdnProvider, JsrMode, OsFs, Resolver, SpecifierKind};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A monorepo-shaped project: packages installed at the top, sources deep below.
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        &root.join("node_modules/@design-tokens/test-package/tokens.json"),
        r#"{"color":{"value":"red"}}"#,
    );
    write(&root.join("node_modules/lodash/package.json"), "{}");
    write(&root.join("node_modules/@jsr/std__path/mod.ts"), "export {};");
    fs::create_dir_all(root.join("packages/app/src/components")).unwrap();
    dir
}

fn chain(start: &Path, jsr: JsrMode) -> ChainResolver {
    ChainResolver::with_defaults(Arc::new(OsFs), start, jsr).unwrap()
}

#[test]
fn test_npm_resolves_from_deep_directory() {
    let dir = project();
    let start = dir.path().join("packages/app/src/components");
    let resolved = chain(&start, JsrMode::Compat)
        .resolve("npm:@design-tokens/test-package/tokens.json")
        .unwrap();

    assert_eq!(resolved.kind, SpecifierKind::Npm);
    assert_eq!(
        resolved.path,
        dir.path()
            .join("node_modules/@design-tokens/test-package/tokens.json")
    );
    assert!(resolved.path.is_absolute());
}

#[test]
fn test_npm_unscoped_resolves() {
    let dir = project();
    let resolved = chain(dir.path(), JsrMode::Compat)
        .resolve("npm:lodash/package.json")
        .unwrap();
    assert_eq!(resolved.path, dir.path().join("node_modules/lodash/package.json"));
}

#[test]
fn test_jsr_compat_resolves_translated_name() {
    let dir = project();
    let start = dir.path().join("packages/app");
    let resolved = chain(&start, JsrMode::Compat)
        .resolve("jsr:@std/path/mod.ts")
        .unwrap();

    assert_eq!(resolved.kind, SpecifierKind::Jsr);
    assert_eq!(resolved.path, dir.path().join("node_modules/@jsr/std__path/mod.ts"));
}

#[test]
fn test_jsr_stub_fails_even_when_installed() {
    let dir = project();
    let err = chain(dir.path(), JsrMode::Stub)
        .resolve("jsr:@std/path/mod.ts")
        .unwrap_err();
    assert_eq!(err.code(), codes::NOT_IMPLEMENTED);
}

#[test]
fn test_missing_package_reports_start_directory() {
    let dir = project();
    let start = dir.path().join("packages/app/src");
    let err = chain(&start, JsrMode::Compat)
        .resolve("npm:@scope/missing/a.json")
        .unwrap_err();

    assert_eq!(err.code(), codes::PACKAGE_NOT_FOUND);
    assert!(err.to_string().contains("@scope/missing"));
}

#[test]
fn test_missing_file_in_installed_package() {
    let dir = project();
    let err = chain(dir.path(), JsrMode::Compat)
        .resolve("npm:lodash/nope.js")
        .unwrap_err();
    assert_eq!(err.code(), codes::PACKAGE_NOT_FOUND);
}

#[test]
fn test_traversal_never_reaches_outside_file() {
    let dir = project();
    write(&dir.path().join("secret.json"), "{}");
    let err = chain(dir.path(), JsrMode::Compat)
        .resolve("npm:lodash/../../secret.json")
        .unwrap_err();
    assert_eq!(err.code(), codes::PATH_TRAVERSAL);
}

#[test]
fn test_local_passthrough_does_not_touch_disk() {
    let dir = project();
    let resolved = chain(dir.path(), JsrMode::Compat)
        .resolve("./does/not/exist.json")
        .unwrap();
    assert_eq!(resolved.kind, SpecifierKind::Local);
    assert_eq!(resolved.path, Path::new("./does/not/exist.json"));
}

#[test]
fn test_resolved_package_has_cdn_url() {
    let dir = project();
    let raw = "npm:@design-tokens/test-package/tokens.json";
    chain(dir.path(), JsrMode::Compat).resolve(raw).unwrap();

    assert_eq!(
        cdn_url(raw, Some(CdnProvider::Jsdelivr)).as_deref(),
        Some("https://cdn.jsdelivr.net/npm/@design-tokens/test-package/tokens.json")
    );
}
