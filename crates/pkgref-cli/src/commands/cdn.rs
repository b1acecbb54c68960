use super::ErrorInfo;
use miette::{IntoDiagnostic, Result};
use pkgref_core::version::OUTPUT_SCHEMA_VERSION;
use pkgref_core::{cdn_url, CdnProvider, Specifier, SpecifierKind};
use serde::Serialize;

/// Error code when no URL can be built.
const CDN_UNSUPPORTED: &str = "CDN_UNSUPPORTED";

/// CDN result for JSON output.
#[derive(Serialize)]
struct CdnJsonResult<'a> {
    schema_version: u32,
    ok: bool,
    provider: CdnProvider,
    specifier: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

/// One row of the provider listing.
#[derive(Serialize)]
struct ProviderInfo {
    id: CdnProvider,
    npm: bool,
    jsr: bool,
    npm_base: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsr_base: Option<&'static str>,
}

/// Run the cdn command.
///
/// Exits with code 2 if no URL can be built for the specifier.
pub fn run(specifier: &str, provider: CdnProvider, json: bool) -> Result<()> {
    let url = cdn_url(specifier, Some(provider));
    tracing::debug!(provider = %provider, url = ?url, "Built CDN URL");

    if json {
        let error = url
            .is_none()
            .then(|| ErrorInfo::new(CDN_UNSUPPORTED, unsupported_reason(specifier, provider)));
        let result = CdnJsonResult {
            schema_version: OUTPUT_SCHEMA_VERSION,
            ok: url.is_some(),
            provider,
            specifier,
            url,
            error,
        };
        println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
        if !result.ok {
            std::process::exit(2);
        }
        return Ok(());
    }

    let Some(url) = url else {
        eprintln!(
            "error[{CDN_UNSUPPORTED}]: {}",
            unsupported_reason(specifier, provider)
        );
        std::process::exit(2);
    };
    println!("{url}");
    Ok(())
}

/// Explain why no URL could be built.
fn unsupported_reason(specifier: &str, provider: CdnProvider) -> String {
    let spec = Specifier::parse(specifier);
    match spec.kind {
        SpecifierKind::Local => format!("{specifier} is a local path, not a package specifier"),
        _ if !spec.has_file() => format!("{specifier} does not select a file inside the package"),
        kind => format!("{provider} does not serve {kind} packages"),
    }
}

/// Run the providers command.
pub fn list(json: bool) -> Result<()> {
    let providers: Vec<ProviderInfo> = CdnProvider::ALL
        .into_iter()
        .map(|provider| ProviderInfo {
            id: provider,
            npm: provider.supports(SpecifierKind::Npm),
            jsr: provider.supports(SpecifierKind::Jsr),
            npm_base: provider.npm_base(),
            jsr_base: provider.jsr_base(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&providers).into_diagnostic()?);
    } else {
        for info in &providers {
            let serves = if info.jsr { "npm, jsr" } else { "npm" };
            println!("{:<10} {:<10} {}", info.id.as_str(), serves, info.npm_base);
        }
    }

    Ok(())
}
