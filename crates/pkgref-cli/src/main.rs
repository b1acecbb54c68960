#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

mod commands;
mod logging;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pkgref_core::{CdnProvider, Config, JsrMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pkgref")]
#[command(author, version, about = "Resolve npm:, jsr: and local specifiers to files or CDN URLs", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Show how a specifier is classified
    Parse {
        /// Specifier (e.g., "npm:@scope/pkg/file.json", "jsr:@std/path/mod.ts", "./file.json")
        specifier: String,
    },

    /// Resolve a specifier to a file path
    Resolve {
        /// Specifier to resolve
        specifier: String,

        /// Directory to start the node_modules search from (defaults to cwd)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// JSR handling: "compat" (node_modules/@jsr) or "stub" (not implemented)
        #[arg(long, value_name = "MODE")]
        jsr: Option<JsrMode>,
    },

    /// Build a CDN URL for a package specifier
    Cdn {
        /// Package specifier
        specifier: String,

        /// Provider: unpkg, esm.sh, esm.run, jspm, jsdelivr
        #[arg(long, short = 'p', value_name = "ID")]
        provider: Option<CdnProvider>,
    },

    /// List CDN providers and what they serve
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory; a relative --cwd is taken from the process cwd
    let process_cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let cwd = match cli.cwd {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => process_cwd.join(dir),
        None => process_cwd,
    };

    // Build config: pkgref.json first, flags on top
    let config = Config::load(cwd.clone())
        .into_diagnostic()?
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        Commands::Version => commands::version::run(cli.json),
        Commands::Parse { specifier } => commands::parse::run(&specifier, cli.json),
        Commands::Resolve {
            specifier,
            root,
            jsr,
        } => {
            let span = tracing::info_span!("resolve", cmd = "resolve", cwd = %cwd.display());
            let _guard = span.enter();

            let mut config = config;
            if let Some(root) = root {
                config = config.with_root(if root.is_absolute() { root } else { cwd.join(root) });
            }
            if let Some(jsr) = jsr {
                config = config.with_jsr(jsr);
            }
            commands::resolve::run(&config, &specifier, cli.json)
        }
        Commands::Cdn {
            specifier,
            provider,
        } => {
            let provider = provider.unwrap_or(config.cdn);
            commands::cdn::run(&specifier, provider, cli.json)
        }
        Commands::Providers => commands::cdn::list(cli.json),
    }
}
