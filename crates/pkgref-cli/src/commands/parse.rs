use miette::{IntoDiagnostic, Result};
use pkgref_core::version::OUTPUT_SCHEMA_VERSION;
use pkgref_core::{Specifier, SpecifierKind};
use serde::Serialize;

/// Parse result for JSON output.
#[derive(Serialize)]
struct ParseJsonResult<'a> {
    schema_version: u32,
    kind: SpecifierKind,
    package: &'a str,
    file: &'a str,
    raw: &'a str,
    is_package: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

/// Run the parse command.
pub fn run(specifier: &str, json: bool) -> Result<()> {
    let spec = Specifier::parse(specifier);
    tracing::trace!(kind = %spec.kind, package = %spec.package, "Parsed specifier");

    if json {
        let result = ParseJsonResult {
            schema_version: OUTPUT_SCHEMA_VERSION,
            kind: spec.kind,
            package: &spec.package,
            file: &spec.file,
            raw: &spec.raw,
            is_package: spec.is_package(),
            name: spec.is_package().then(|| spec.name()),
            version: spec.version(),
        };
        println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
    } else {
        println!("kind:    {}", spec.kind);
        if spec.is_package() {
            println!("package: {}", spec.package);
            if let Some(version) = spec.version() {
                println!("version: {version}");
            }
        }
        println!("file:    {}", spec.file);
    }

    Ok(())
}
