//! # fleet-shell
//!
//! Navigation shell for a catalog of externally hosted dashboard reports.
//!
//! The shell presents reports grouped by category in a collapsible sidebar
//! and shows the selected one in a sandboxed embedded viewer. The active
//! report lives in the page address (`?reportId=...`), so links are
//! shareable and the back button works. Theme and sidebar width are
//! remembered across sessions, and the theme is forwarded to the embedded
//! viewer through its URL.
//!
//! ## Quick Start
//!
//! ```rust
//! use fleet_shell::catalog::CatalogConfig;
//! use fleet_shell::location::MemoryLocation;
//! use fleet_shell::preferences::{MemoryBackend, PreferenceStore};
//! use fleet_shell::shell::{DashboardShell, ShellEvent};
//! use fleet_shell::{render_shell, ShellAssets};
//!
//! let config = CatalogConfig::builtin();
//! let prefs = PreferenceStore::load(MemoryBackend::default(), || false);
//! let mut shell = DashboardShell::new(&config, MemoryLocation::new(""), prefs);
//!
//! shell.dispatch(ShellEvent::SelectReport("dashboard-1".into()));
//!
//! let html = render_shell(&shell, &config, &ShellAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("reportId") || html.contains("dashboard-1"));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - Report catalog, config loading and lookups
//! - [`category`] - Category partition of the catalog
//! - [`selection`] - Address-driven selection controller
//! - [`location`] - The `reportId` query parameter and location seam
//! - [`preferences`] - Persisted theme and sidebar width
//! - [`theme`] - Theme parameter rewriting for view URLs
//! - [`navigation`] - Sidebar model
//! - [`viewer`] - Viewer render states and frame identity
//! - [`shell`] - Event-driven composition of all of the above
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and security header constants
//!
//! ## Leptos 0.8 SSR
//!
//! Markup is produced with Leptos 0.8's `RenderHtml` trait, both on the
//! server and inside the browser module (`fleet-shell-wasm`), so the two
//! always agree:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod category;
pub mod components;
pub mod location;
pub mod navigation;
pub mod preferences;
pub mod selection;
pub mod shell;
pub mod styles;
pub mod theme;
pub mod types;
pub mod viewer;

use components::{ShellDocument, Sidebar, ThemeToggle, ViewerPanel};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::warn;

use catalog::CatalogConfig;
use location::Location;
use navigation::NavModel;
use preferences::PreferenceBackend;
use shell::DashboardShell;
use types::Theme;
use viewer::ViewerState;

/// Render the complete shell page for the current state.
///
/// `config` is embedded in the page so the browser module can boot the same
/// catalog. A static page (see [`ShellAssets::is_static`]) renders the loading
/// overlay hidden, since nothing would ever clear it.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_shell<L: Location, B: PreferenceBackend>(
    shell: &DashboardShell<L, B>,
    config: &CatalogConfig,
    assets: &ShellAssets,
) -> String {
    let doc = view! {
        <ShellDocument
            brand=shell.brand().clone()
            theme=shell.preferences().theme
            model=shell.nav_model()
            viewer=shell.viewer().clone()
            loading=shell.frame().is_loading() && !assets.is_static()
            catalog_json=boot_json(config)
            assets=assets.clone()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the sidebar, for in-place DOM updates.
pub fn render_sidebar(model: &NavModel) -> String {
    view! { <Sidebar model=model.clone() /> }.to_html()
}

/// Render only the viewer section, for in-place DOM updates.
pub fn render_viewer(state: &ViewerState, loading: bool) -> String {
    view! { <ViewerPanel state=state.clone() loading=loading /> }.to_html()
}

/// Render only the theme toggle button.
pub fn render_theme_toggle(theme: Theme) -> String {
    view! { <ThemeToggle theme=theme /> }.to_html()
}

/// Response headers for the shell page, one `Name: value` line each.
///
/// `frame-ancestors` has no effect in the page's `<meta>` policy, so hosts
/// serve these alongside the HTML.
pub fn render_response_headers() -> String {
    styles::RESPONSE_HEADERS
        .iter()
        .map(|(name, value)| format!("{name}: {value}\n"))
        .collect()
}

/// Catalog JSON safe to place inside a `<script>` element.
fn boot_json(config: &CatalogConfig) -> String {
    match serde_json::to_string(config) {
        // `<` only occurs inside JSON strings, where the escape is equivalent.
        Ok(json) => json.replace('<', "\\u003c"),
        Err(err) => {
            warn!(%err, "failed to serialize catalog for the page");
            String::from("{}")
        }
    }
}

/// Browser module location.
///
/// With an empty glue path the page is static: it shows the server-rendered
/// state and does not react to clicks.
///
/// # Example
///
/// ```rust
/// use fleet_shell::ShellAssets;
///
/// let assets = ShellAssets {
///     wasm_glue_path: "./pkg/fleet_shell_wasm.js".into(),
/// };
/// assert!(!assets.is_static());
/// ```
#[derive(Clone, Default, Debug)]
pub struct ShellAssets {
    /// Path to the wasm-bindgen JS glue of `fleet-shell-wasm`
    pub wasm_glue_path: String,
}

impl ShellAssets {
    /// Whether the page renders without the browser module.
    pub fn is_static(&self) -> bool {
        self.wasm_glue_path.trim().is_empty()
    }
}
