//! CDN URL construction for package specifiers.
//!
//! Pure string building: no request is made and no file is checked.

use crate::error::Error;
use crate::specifier::{Specifier, SpecifierKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported CDN providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CdnProvider {
    #[default]
    #[serde(rename = "unpkg")]
    Unpkg,
    #[serde(rename = "esm.sh")]
    EsmSh,
    #[serde(rename = "esm.run")]
    EsmRun,
    #[serde(rename = "jspm")]
    Jspm,
    #[serde(rename = "jsdelivr")]
    Jsdelivr,
}

impl CdnProvider {
    /// All providers, in listing order.
    pub const ALL: [Self; 5] = [
        Self::Unpkg,
        Self::EsmSh,
        Self::EsmRun,
        Self::Jspm,
        Self::Jsdelivr,
    ];

    /// Provider identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpkg => "unpkg",
            Self::EsmSh => "esm.sh",
            Self::EsmRun => "esm.run",
            Self::Jspm => "jspm",
            Self::Jsdelivr => "jsdelivr",
        }
    }

    /// URL prefix for npm packages; the package name follows directly.
    #[must_use]
    pub fn npm_base(&self) -> &'static str {
        match self {
            Self::Unpkg => "https://unpkg.com/",
            Self::EsmSh => "https://esm.sh/",
            Self::EsmRun => "https://esm.run/",
            Self::Jspm => "https://ga.jspm.io/npm:",
            Self::Jsdelivr => "https://cdn.jsdelivr.net/npm/",
        }
    }

    /// URL prefix for JSR packages, if the provider serves them.
    #[must_use]
    pub fn jsr_base(&self) -> Option<&'static str> {
        match self {
            Self::EsmSh => Some("https://esm.sh/jsr/"),
            _ => None,
        }
    }

    /// Whether the provider serves packages of `kind`.
    #[must_use]
    pub fn supports(&self, kind: SpecifierKind) -> bool {
        self.base_for(kind).is_some()
    }

    fn base_for(&self, kind: SpecifierKind) -> Option<&'static str> {
        match kind {
            SpecifierKind::Npm => Some(self.npm_base()),
            SpecifierKind::Jsr => self.jsr_base(),
            SpecifierKind::Local => None,
        }
    }
}

impl fmt::Display for CdnProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CdnProvider {
    type Err = Error;

    /// Parse a provider identifier; the empty string selects the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| Error::UnknownProvider(s.to_string()))
    }
}

/// Build the CDN URL for a specifier.
///
/// `None` as provider selects `unpkg`. Returns `None` for local specifiers,
/// package specifiers without a file, and providers that do not serve the
/// specifier's registry.
#[must_use]
pub fn cdn_url(raw: &str, provider: Option<CdnProvider>) -> Option<String> {
    let spec = Specifier::parse(raw);
    if !spec.has_file() {
        return None;
    }

    let provider = provider.unwrap_or_default();
    let base = provider.base_for(spec.kind)?;
    Some(format!("{base}{}/{}", spec.package, spec.file))
}
