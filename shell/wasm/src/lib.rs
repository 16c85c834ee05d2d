//! Browser host for the fleet dashboard shell.
//!
//! Binds the shell's seams to the browser: the location is backed by
//! `window.location` and `history.replaceState`, preferences by
//! `localStorage`, and the system theme by `prefers-color-scheme`. The page's
//! boot script owns a [`ShellHandle`], forwards DOM events to it as JSON, and
//! swaps in the fragments it renders.
//!
//! Markup comes from the same Leptos components the server uses
//! (`fleet_shell::render_sidebar` and friends), so a patched fragment is
//! identical to what a fresh server render would produce.

use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

use fleet_shell::catalog::CatalogConfig;
use fleet_shell::location::{Location, LocationError};
use fleet_shell::preferences::{PreferenceBackend, PreferenceStore};
use fleet_shell::shell::{DashboardShell, ShellEvent};
use fleet_shell::types::Theme;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// Browser seams
// ============================================================================

/// `window.location` + `history.replaceState`.
#[derive(Clone, Debug)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    /// Location of `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Location for BrowserLocation {
    fn query(&self) -> String {
        let search = self.window.location().search().unwrap_or_default();
        search.strip_prefix('?').unwrap_or(&search).to_string()
    }

    fn replace_query(&mut self, query: &str) -> Result<(), LocationError> {
        let location = self.window.location();
        let path = location.pathname().map_err(js_location_error)?;
        let hash = location.hash().unwrap_or_default();
        let history = self.window.history().map_err(js_location_error)?;
        // Keep whatever state the current entry carries.
        let state = history.state().unwrap_or(JsValue::NULL);
        history
            .replace_state_with_url(&state, "", Some(&entry_url(&path, query, &hash)))
            .map_err(js_location_error)
    }
}

/// Relative URL for a history entry.
fn entry_url(path: &str, query: &str, hash: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        format!("{path}{hash}")
    } else {
        format!("{path}?{query}{hash}")
    }
}

fn js_location_error(err: JsValue) -> LocationError {
    LocationError(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// `localStorage`, when the browser grants it.
///
/// Without storage (privacy mode, sandboxed documents) reads come back empty
/// and writes are dropped.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend {
    storage: Option<Storage>,
}

impl LocalStorageBackend {
    /// Backend over `window.localStorage`.
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            warn!(key, ?err, "could not persist preference");
        }
    }
}

/// `prefers-color-scheme: dark` media query.
pub fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

// ============================================================================
// WASM Exports
// ============================================================================

/// The running shell, owned by the page's boot script.
#[wasm_bindgen]
pub struct ShellHandle {
    inner: DashboardShell<BrowserLocation, LocalStorageBackend>,
}

#[derive(Serialize)]
struct HandleSnapshot<'a> {
    active_report_id: Option<&'a str>,
    pending: Option<&'a str>,
    theme: Theme,
    panel_collapsed: bool,
    viewer: &'a str,
    frame_key: Option<&'a str>,
}

#[wasm_bindgen]
impl ShellHandle {
    /// Boot from the catalog JSON embedded in the page.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str) -> Result<ShellHandle, JsValue> {
        let config = CatalogConfig::from_json_str(catalog_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse catalog: {}", e)))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let prefs = PreferenceStore::load(LocalStorageBackend::new(&window), || {
            system_prefers_dark(&window)
        });
        let location = BrowserLocation::new(window.clone());

        Ok(Self {
            inner: DashboardShell::new(&config, location, prefs),
        })
    }

    /// Handle one event (`{"type": "...", "value": ...}`) and return the
    /// update flags as JSON.
    pub fn dispatch(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: ShellEvent = serde_json::from_str(event_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse event: {}", e)))?;
        let update = self.inner.dispatch(event);
        serde_json::to_string(&update).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Sidebar markup for the current state.
    pub fn render_sidebar(&self) -> String {
        fleet_shell::render_sidebar(&self.inner.nav_model())
    }

    /// Viewer markup for the current state.
    pub fn render_viewer(&self) -> String {
        fleet_shell::render_viewer(self.inner.viewer(), self.inner.frame().is_loading())
    }

    /// Theme toggle markup for the current theme.
    pub fn render_theme_toggle(&self) -> String {
        fleet_shell::render_theme_toggle(self.inner.preferences().theme)
    }

    /// Current theme, also the `<html>` class.
    pub fn theme(&self) -> String {
        self.inner.preferences().theme.as_str().to_string()
    }

    /// Whether the loading overlay is visible.
    pub fn is_loading(&self) -> bool {
        self.inner.frame().is_loading()
    }

    /// Key of the mounted embed.
    pub fn frame_key(&self) -> Option<String> {
        self.inner.frame().key().map(str::to_string)
    }

    /// Id of the active report.
    pub fn active_report_id(&self) -> Option<String> {
        self.inner.selection().active_id().map(str::to_string)
    }

    /// Debug snapshot of the shell state as JSON.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let prefs = self.inner.preferences();
        let snapshot = HandleSnapshot {
            active_report_id: self.inner.selection().active_id(),
            pending: self.inner.controller().pending(),
            theme: prefs.theme,
            panel_collapsed: prefs.panel_collapsed,
            viewer: self.inner.viewer().label(),
            frame_key: self.inner.frame().key(),
        };
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Rewrite `view_url` for `theme` (`"light"` or `"dark"`).
#[wasm_bindgen]
pub fn apply_theme(view_url: &str, theme: &str) -> Result<String, JsValue> {
    let theme: Theme = theme.parse().map_err(|e: String| JsValue::from_str(&e))?;
    Ok(fleet_shell::theme::apply_theme(view_url, theme))
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("fleet-shell-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn replace_query_does_not_push_history() {
        let window = web_sys::window().unwrap();
        let before = window.history().unwrap().length().unwrap();

        let mut location = BrowserLocation::new(window.clone());
        location.replace_query("reportId=dashboard-2").unwrap();

        assert_eq!(location.query(), "reportId=dashboard-2");
        assert_eq!(window.history().unwrap().length().unwrap(), before);
    }

    #[wasm_bindgen_test]
    fn theme_export_rejects_unknown_theme() {
        assert!(apply_theme("http://x/d/a", "sepia").is_err());
        assert_eq!(apply_theme("http://x/d/a", "dark").unwrap(), "http://x/d/a?theme=dark");
    }
}
