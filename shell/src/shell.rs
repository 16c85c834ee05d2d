//! Dashboard shell: one selection controller, one preference store, one
//! navigation panel and one viewer frame, driven by discrete events.
//!
//! Every [`ShellEvent`] runs to completion before the next one is handled.
//! After each event the shell reconciles the navigation panel and the viewer
//! with the controller's selection and the current theme, and reports what
//! the host has to re-render in a [`ShellUpdate`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogConfig};
use crate::location::Location;
use crate::navigation::{NavModel, NavigationPanel};
use crate::preferences::{PreferenceBackend, PreferenceStore, UiPreferences};
use crate::selection::{Selection, SelectionController};
use crate::types::{Brand, CategoryId};
use crate::viewer::{ViewerFrame, ViewerState};

/// Discrete user or browser events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ShellEvent {
    /// Click on a report row
    SelectReport(String),
    /// The location changed outside the shell (popstate, address bar)
    LocationChanged,
    /// Theme toggle button
    ToggleTheme,
    /// Sidebar width toggle button
    TogglePanel,
    /// Category group header
    ToggleCategory(CategoryId),
    /// Load event from the embed with this frame key
    FrameLoaded(String),
    /// Search box input
    Search(String),
}

/// What changed while handling an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShellUpdate {
    /// Sidebar markup is stale
    pub sidebar: bool,
    /// Viewer markup is stale
    pub viewer: bool,
    /// The embed must be remounted (new frame key)
    pub remount_frame: bool,
    /// Document theme class must change
    pub theme: bool,
    /// The loading overlay visibility changed
    pub loading: bool,
}

/// The composed navigation shell.
pub struct DashboardShell<L, B> {
    catalog: Arc<Catalog>,
    brand: Brand,
    controller: SelectionController<L>,
    prefs: PreferenceStore<B>,
    nav: NavigationPanel,
    viewer: ViewerState,
    frame: ViewerFrame,
}

impl<L: fmt::Debug, B: fmt::Debug> fmt::Debug for DashboardShell<L, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardShell")
            .field("controller", &self.controller)
            .field("prefs", &self.prefs)
            .field("nav", &self.nav)
            .field("viewer", &self.viewer)
            .field("frame", &self.frame)
            .finish()
    }
}

impl<L: Location, B: PreferenceBackend> DashboardShell<L, B> {
    /// Build the shell and resolve the startup selection from `location`.
    pub fn new(config: &CatalogConfig, location: L, prefs: PreferenceStore<B>) -> Self {
        let catalog = Arc::new(config.catalog());
        let mut controller =
            SelectionController::new(Arc::clone(&catalog), location, config.default_report.clone());
        controller.initialize_from_location();

        let mut nav = NavigationPanel::new();
        nav.sync_selection(controller.selection());

        let viewer = ViewerState::resolve(controller.selection(), prefs.theme());
        let mut frame = ViewerFrame::default();
        frame.update(&viewer);

        Self {
            catalog,
            brand: config.brand.clone(),
            controller,
            prefs,
            nav,
            viewer,
            frame,
        }
    }

    /// Handle one event to completion.
    pub fn dispatch(&mut self, event: ShellEvent) -> ShellUpdate {
        debug!(?event, "shell event");
        let before = self.controller.selection().clone();
        let before_pending = self.controller.pending().map(str::to_string);
        let before_loading = self.frame.is_loading();
        let mut update = ShellUpdate::default();

        match event {
            ShellEvent::SelectReport(id) => {
                let catalog = Arc::clone(&self.catalog);
                if let Some(report) = self.nav.request_select(&catalog, &id) {
                    self.controller.select(report);
                }
                update.sidebar = true;
            }
            ShellEvent::LocationChanged => self.controller.sync_with_location(),
            ShellEvent::ToggleTheme => {
                self.prefs.toggle_theme();
                update.theme = true;
            }
            ShellEvent::TogglePanel => {
                self.nav.toggle_collapsed(&mut self.prefs);
                update.sidebar = true;
            }
            ShellEvent::ToggleCategory(id) => {
                self.nav.toggle_category(id);
                update.sidebar = true;
            }
            ShellEvent::FrameLoaded(key) => self.frame.frame_loaded(&key),
            ShellEvent::Search(text) => {
                self.nav.set_filter(&text);
                update.sidebar = true;
            }
        }

        let selection_changed = *self.controller.selection() != before;
        if selection_changed {
            self.nav.sync_selection(self.controller.selection());
        }
        if selection_changed || self.controller.pending() != before_pending.as_deref() {
            update.sidebar = true;
        }

        let viewer = ViewerState::resolve(self.controller.selection(), self.prefs.theme());
        if viewer != self.viewer {
            self.viewer = viewer;
            update.viewer = true;
        }
        update.remount_frame = self.frame.update(&self.viewer);
        update.loading = self.frame.is_loading() != before_loading;
        update
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Top bar brand text.
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Resolved selection.
    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    /// The selection controller.
    pub fn controller(&self) -> &SelectionController<L> {
        &self.controller
    }

    /// Mutable selection controller, for hosts that drive the location.
    pub fn controller_mut(&mut self) -> &mut SelectionController<L> {
        &mut self.controller
    }

    /// Current preferences.
    pub fn preferences(&self) -> UiPreferences {
        self.prefs.preferences()
    }

    /// The preference store.
    pub fn preference_store(&self) -> &PreferenceStore<B> {
        &self.prefs
    }

    /// Current viewer state.
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Mounted frame bookkeeping.
    pub fn frame(&self) -> &ViewerFrame {
        &self.frame
    }

    /// Sidebar model for the current state.
    pub fn nav_model(&self) -> NavModel {
        self.nav.model(
            &self.catalog,
            self.controller.selection(),
            self.controller.pending(),
            self.prefs.panel_collapsed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{MemoryLocation, report_id_from_query};
    use crate::preferences::{KEY_THEME, MemoryBackend};
    use crate::types::{Report, Theme};

    fn config() -> CatalogConfig {
        CatalogConfig {
            reports: vec![
                Report {
                    id: "r1".into(),
                    name: "Trips".into(),
                    category: CategoryId::Standard,
                    view_url: "http://x/d/a?orgId=1".into(),
                    ..Default::default()
                },
                Report {
                    id: "r2".into(),
                    name: "Fuel Level".into(),
                    category: CategoryId::Fuel,
                    view_url: String::new(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn shell(query: &str, theme: Theme) -> DashboardShell<MemoryLocation, MemoryBackend> {
        let prefs = PreferenceStore::load(
            MemoryBackend::with_values([(KEY_THEME, theme.as_str())]),
            || false,
        );
        DashboardShell::new(&config(), MemoryLocation::new(query), prefs)
    }

    #[test]
    fn shared_link_embeds_themed_url() {
        let shell = shell("?reportId=r1", Theme::Dark);
        match shell.viewer() {
            ViewerState::Embed { frame } => {
                assert_eq!(frame.src, "http://x/d/a?orgId=1&theme=dark")
            }
            other => panic!("expected embed, got {other:?}"),
        }
        assert!(shell.nav_model().groups[1].expanded);
    }

    #[test]
    fn selecting_unconfigured_report_never_embeds() {
        let mut shell = shell("", Theme::Light);
        let update = shell.dispatch(ShellEvent::SelectReport("r2".into()));

        assert!(update.viewer);
        assert!(!update.remount_frame);
        match shell.viewer() {
            ViewerState::Misconfigured { report } => assert_eq!(report.id, "r2"),
            other => panic!("expected misconfigured, got {other:?}"),
        }
        assert_eq!(shell.frame().key(), None);
    }

    #[test]
    fn ghost_link_shows_not_found_and_no_highlight() {
        let shell = shell("reportId=ghost", Theme::Light);
        assert_eq!(shell.viewer(), &ViewerState::NotFound { id: "ghost".into() });
        assert!(
            shell
                .nav_model()
                .groups
                .iter()
                .flat_map(|g| &g.items)
                .all(|i| !i.active)
        );
    }

    #[test]
    fn theme_toggle_rekeys_frame_but_keeps_selection() {
        let mut shell = shell("reportId=r1", Theme::Light);
        let key_before = shell.frame().key().map(str::to_string);

        let update = shell.dispatch(ShellEvent::ToggleTheme);

        assert!(update.theme);
        assert!(update.remount_frame);
        assert_eq!(shell.selection().active_id(), Some("r1"));
        assert_ne!(shell.frame().key().map(str::to_string), key_before);
        assert_eq!(shell.preferences().theme, Theme::Dark);
        assert!(shell.frame().key().unwrap().ends_with("theme=dark"));
    }

    #[test]
    fn select_updates_location_in_place() {
        let mut shell = shell("", Theme::Light);
        shell.dispatch(ShellEvent::SelectReport("r1".into()));
        shell.dispatch(ShellEvent::SelectReport("r2".into()));

        let location = shell.controller().location();
        assert_eq!(location.history_len(), 1);
        assert_eq!(report_id_from_query(&location.query()).as_deref(), Some("r2"));
    }

    #[test]
    fn back_button_restores_previous_report() {
        let mut shell = shell("reportId=r1", Theme::Light);
        shell.controller_mut().location_mut().push("reportId=r2");
        shell.dispatch(ShellEvent::LocationChanged);
        assert_eq!(shell.selection().active_id(), Some("r2"));
        assert!(shell.nav_model().groups.iter().any(|g| g.category.id == CategoryId::Fuel && g.expanded));

        shell.controller_mut().location_mut().back();
        let update = shell.dispatch(ShellEvent::LocationChanged);
        assert_eq!(shell.selection().active_id(), Some("r1"));
        assert!(update.sidebar && update.viewer && update.remount_frame);
    }

    #[test]
    fn loading_overlay_clears_on_frame_load() {
        let mut shell = shell("reportId=r1", Theme::Light);
        assert!(shell.frame().is_loading());

        let key = shell.frame().key().unwrap().to_string();
        let update = shell.dispatch(ShellEvent::FrameLoaded(key));
        assert!(update.loading);
        assert!(!shell.frame().is_loading());
    }

    #[test]
    fn panel_toggle_persists_and_reloads() {
        let mut shell = shell("", Theme::Light);
        shell.dispatch(ShellEvent::TogglePanel);
        assert!(shell.nav_model().collapsed);

        let prefs = PreferenceStore::load(shell.preference_store().backend().clone(), || true);
        let reloaded = DashboardShell::new(&config(), MemoryLocation::new(""), prefs);
        assert!(reloaded.preferences().panel_collapsed);
        assert_eq!(reloaded.preferences().theme, Theme::Light);
    }

    #[test]
    fn unknown_click_changes_nothing() {
        let mut shell = shell("reportId=r1", Theme::Light);
        let update = shell.dispatch(ShellEvent::SelectReport("ghost".into()));
        assert!(!update.viewer);
        assert_eq!(shell.selection().active_id(), Some("r1"));
    }

    #[test]
    fn events_deserialize_from_json() {
        let event: ShellEvent =
            serde_json::from_str(r#"{"type":"toggle_category","value":"fuel"}"#).unwrap();
        assert_eq!(event, ShellEvent::ToggleCategory(CategoryId::Fuel));
        let event: ShellEvent = serde_json::from_str(r#"{"type":"toggle_theme"}"#).unwrap();
        assert_eq!(event, ShellEvent::ToggleTheme);
    }
}
