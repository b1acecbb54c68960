use miette::{IntoDiagnostic, Result};
use pkgref_core::version::{version_string, VersionInfo};

pub fn run(json: bool) -> Result<()> {
    if json {
        let info = VersionInfo::current();
        println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
