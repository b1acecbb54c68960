use crate::cdn::CdnProvider;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "pkgref.json";

/// Runtime configuration for pkgref.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Current working directory.
    #[serde(skip)]
    pub cwd: PathBuf,

    /// Whether to emit JSON logs.
    #[serde(skip)]
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    #[serde(skip)]
    pub verbosity: u8,

    /// Directory the `node_modules` walk-up starts from (defaults to `cwd`).
    pub root: Option<PathBuf>,

    /// How `jsr:` specifiers are handled.
    pub jsr: JsrMode,

    /// Default CDN provider.
    pub cdn: CdnProvider,
}

/// Which resolver handles `jsr:` specifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JsrMode {
    /// Resolve through `node_modules/@jsr/...`.
    #[default]
    Compat,
    /// Fail every `jsr:` specifier as not implemented.
    Stub,
}

impl JsrMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Stub => "stub",
        }
    }
}

impl FromStr for JsrMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compat" => Ok(Self::Compat),
            "stub" => Ok(Self::Stub),
            other => Err(Error::UnknownJsrMode(other.to_string())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            json_logs: false,
            verbosity: 0,
            root: None,
            jsr: JsrMode::default(),
            cdn: CdnProvider::default(),
        }
    }
}

impl Config {
    /// Create a new config with the given working directory.
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            ..Default::default()
        }
    }

    /// Load `pkgref.json` from `cwd` if present, otherwise use defaults.
    ///
    /// # Errors
    /// Returns `ConfigRead` or `ConfigParse` if the file exists but cannot be
    /// read or parsed.
    pub fn load(cwd: PathBuf) -> Result<Self, Error> {
        let path = cwd.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::new(cwd));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| Error::ConfigParse { path, source })?;

        // Relative roots in the file are relative to the file's directory
        if let Some(root) = config.root.take() {
            config.root = Some(if root.is_absolute() { root } else { cwd.join(root) });
        }
        config.cwd = cwd;
        Ok(config)
    }

    /// Directory the walk-up starts from.
    #[must_use]
    pub fn start_dir(&self) -> &Path {
        self.root.as_deref().unwrap_or(&self.cwd)
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Set the walk-up start directory.
    #[must_use]
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    /// Set JSR handling.
    #[must_use]
    pub fn with_jsr(mut self, jsr: JsrMode) -> Self {
        self.jsr = jsr;
        self
    }

    /// Set the default CDN provider.
    #[must_use]
    pub fn with_cdn(mut self, cdn: CdnProvider) -> Self {
        self.cdn = cdn;
        self
    }
}
