//! # fleetctl
//!
//! Command-line companion for fleet-shell catalogs.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a catalog before deploying it
//! fleetctl check reports.toml
//!
//! # Static shell page for a shared link
//! fleetctl render --catalog reports.toml --query "reportId=dashboard-1" --theme dark -o index.html
//!
//! # What would a link show?
//! fleetctl resolve --catalog reports.toml "?reportId=dashboard-4"
//!
//! # Theme rewrite of a single URL
//! fleetctl theme-url "http://grafana/d/abc?orgId=1" dark
//! ```

mod check;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use fleet_shell::catalog::CatalogConfig;
use fleet_shell::location::MemoryLocation;
use fleet_shell::preferences::{KEY_SIDEBAR_COLLAPSED, KEY_THEME, MemoryBackend, PreferenceStore};
use fleet_shell::selection::{Selection, resolve};
use fleet_shell::shell::DashboardShell;
use fleet_shell::theme::apply_theme;
use fleet_shell::types::Theme;
use fleet_shell::viewer::ViewerState;
use fleet_shell::{ShellAssets, render_response_headers, render_shell};

use check::{check_catalog, has_errors};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "fleetctl")]
#[command(about = "Validate, render and inspect fleet-shell report catalogs")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a catalog file for errors and warnings
    Check {
        /// Catalog file (.toml or .json)
        catalog: PathBuf,
        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the full shell page to static HTML
    Render {
        /// Catalog file (builtin catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Page query string, e.g. "reportId=dashboard-1"
        #[arg(long, default_value = "")]
        query: String,
        /// Theme (light or dark); system default is light
        #[arg(long, value_parser = parse_theme)]
        theme: Option<Theme>,
        /// Render with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
        /// Path of the fleet-shell-wasm JS glue; static page when omitted
        #[arg(long)]
        wasm_glue: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write the response headers the page must be served with
        #[arg(long)]
        headers: Option<PathBuf>,
    },
    /// Print the selection and viewer state a query resolves to
    Resolve {
        /// Catalog file (builtin catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Theme used for the embed URL
        #[arg(long, value_parser = parse_theme, default_value = "light")]
        theme: Theme,
        /// Page query string, leading '?' optional
        query: String,
    },
    /// Rewrite a view URL for a theme
    ThemeUrl {
        /// View URL
        url: String,
        /// Theme (light or dark)
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse()
}

#[derive(Serialize)]
struct Resolution<'a> {
    selection: &'a Selection,
    viewer: &'a ViewerState,
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<CatalogConfig> {
    match path {
        Some(path) => {
            let config = CatalogConfig::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            debug!(reports = config.reports.len(), path = %path.display(), "catalog loaded");
            Ok(config)
        }
        None => {
            debug!("using builtin catalog");
            Ok(CatalogConfig::builtin())
        }
    }
}

fn run_check(path: &Path, json: bool) -> Result<ExitCode> {
    let config = load_config(Some(path))?;
    let issues = check_catalog(&config);
    info!(reports = config.reports.len(), issues = issues.len(), "catalog checked");

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!("{}: {} reports, no issues", path.display(), config.reports.len());
    } else {
        for issue in &issues {
            println!("{issue}");
        }
    }

    Ok(if has_errors(&issues) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

struct RenderArgs<'a> {
    catalog: Option<&'a Path>,
    query: &'a str,
    theme: Option<Theme>,
    collapsed: bool,
    wasm_glue: Option<String>,
    output: Option<&'a Path>,
    headers: Option<&'a Path>,
}

fn run_render(args: RenderArgs<'_>) -> Result<ExitCode> {
    let RenderArgs {
        catalog,
        query,
        theme,
        collapsed,
        wasm_glue,
        output,
        headers,
    } = args;
    let config = load_config(catalog)?;

    let mut stored = Vec::new();
    if let Some(theme) = theme {
        stored.push((KEY_THEME, theme.as_str()));
    }
    if collapsed {
        stored.push((KEY_SIDEBAR_COLLAPSED, "true"));
    }
    let prefs = PreferenceStore::load(MemoryBackend::with_values(stored), || false);
    let shell = DashboardShell::new(&config, MemoryLocation::new(query), prefs);

    let assets = ShellAssets {
        wasm_glue_path: wasm_glue.unwrap_or_default(),
    };
    let html = render_shell(&shell, &config, &assets);

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "shell written");
        }
        None => println!("{html}"),
    }

    if let Some(path) = headers {
        std::fs::write(path, render_response_headers())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "response headers written");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_resolve(catalog: Option<&Path>, theme: Theme, query: &str) -> Result<ExitCode> {
    let config = load_config(catalog)?;
    let selection = resolve(&config.catalog(), query, config.default_report.as_deref());
    let viewer = ViewerState::resolve(&selection, theme);

    let resolution = Resolution {
        selection: &selection,
        viewer: &viewer,
    };
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(ExitCode::SUCCESS)
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Check { catalog, json } => run_check(&catalog, json),
        Command::Render {
            catalog,
            query,
            theme,
            collapsed,
            wasm_glue,
            output,
            headers,
        } => run_render(RenderArgs {
            catalog: catalog.as_deref(),
            query: &query,
            theme,
            collapsed,
            wasm_glue,
            output: output.as_deref(),
            headers: headers.as_deref(),
        }),
        Command::Resolve {
            catalog,
            theme,
            query,
        } => run_resolve(catalog.as_deref(), theme, &query),
        Command::ThemeUrl { url, theme } => {
            println!("{}", apply_theme(&url, theme));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[fleetctl] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
