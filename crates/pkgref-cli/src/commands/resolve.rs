use super::ErrorInfo;
use miette::{IntoDiagnostic, Result};
use pkgref_core::version::OUTPUT_SCHEMA_VERSION;
use pkgref_core::{ChainResolver, Config, OsFs, ResolvedFile, Resolver};
use serde::Serialize;
use std::sync::Arc;

/// Resolve result for JSON output.
#[derive(Serialize)]
struct ResolveJsonResult {
    schema_version: u32,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<ResolvedFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

/// Run the resolve command.
///
/// Exits with code 2 if the specifier cannot be resolved.
pub fn run(config: &Config, specifier: &str, json: bool) -> Result<()> {
    let outcome = ChainResolver::with_defaults(Arc::new(OsFs), config.start_dir(), config.jsr)
        .and_then(|chain| {
            tracing::debug!(resolvers = ?chain.names(), root = %config.start_dir().display(), "Built resolver chain");
            chain.resolve(specifier)
        });

    match outcome {
        Ok(resolved) => {
            if json {
                let result = ResolveJsonResult {
                    schema_version: OUTPUT_SCHEMA_VERSION,
                    ok: true,
                    resolved: Some(resolved),
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
            } else {
                println!("{}", resolved.path.display());
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = ResolveJsonResult {
                    schema_version: OUTPUT_SCHEMA_VERSION,
                    ok: false,
                    resolved: None,
                    error: Some(ErrorInfo::new(err.code(), err.to_string())),
                };
                println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
            } else {
                eprintln!("error[{}]: {err}", err.code());
            }
            std::process::exit(2);
        }
    }
}
