//! Persisted UI preferences: sidebar collapsed flag and theme.
//!
//! The [`PreferenceStore`] is the only writer. Storage is abstracted behind
//! [`PreferenceBackend`] so the same store runs against `localStorage` in the
//! browser and against [`MemoryBackend`] during SSR and tests.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Theme;

/// Storage key for the sidebar collapsed flag (`"true"` / `"false"`).
pub const KEY_SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
/// Storage key for the theme (`"light"` / `"dark"`).
pub const KEY_THEME: &str = "theme";

/// String key/value storage that survives reloads.
///
/// Writes are fire-and-forget; a backend that fails to persist simply loses
/// the value.
pub trait PreferenceBackend {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value, overwriting any previous one.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    /// Backend pre-filled with `pairs`.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Snapshot of the persisted UI settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Sidebar shown in its narrow, icon-only form
    pub panel_collapsed: bool,
    /// Shell and embed color scheme
    pub theme: Theme,
}

type PreferenceListener = Box<dyn FnMut(&UiPreferences)>;

/// Single writer of [`UiPreferences`].
pub struct PreferenceStore<B> {
    backend: B,
    prefs: UiPreferences,
    listeners: Vec<PreferenceListener>,
}

impl<B: fmt::Debug> fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("backend", &self.backend)
            .field("prefs", &self.prefs)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Read preferences from `backend`.
    ///
    /// `system_prefers_dark` is consulted only when no valid theme is
    /// persisted. Unrecognized stored values count as absent.
    pub fn load(backend: B, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        let theme = match backend.get(KEY_THEME).and_then(|v| v.parse::<Theme>().ok()) {
            Some(theme) => theme,
            None => Theme::from_system(system_prefers_dark()),
        };
        let panel_collapsed = backend.get(KEY_SIDEBAR_COLLAPSED).as_deref() == Some("true");

        Self {
            backend,
            prefs: UiPreferences {
                panel_collapsed,
                theme,
            },
            listeners: Vec::new(),
        }
    }

    /// Current preferences.
    pub fn preferences(&self) -> UiPreferences {
        self.prefs
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    /// Whether the sidebar is collapsed.
    pub fn panel_collapsed(&self) -> bool {
        self.prefs.panel_collapsed
    }

    /// Set and persist the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.backend.set(KEY_THEME, theme.as_str());
        debug!(theme = theme.as_str(), "theme preference written");
        self.notify();
    }

    /// Flip the theme; returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.prefs.theme.toggle();
        self.set_theme(next);
        next
    }

    /// Set and persist the sidebar collapsed flag.
    pub fn set_panel_collapsed(&mut self, collapsed: bool) {
        self.prefs.panel_collapsed = collapsed;
        self.backend
            .set(KEY_SIDEBAR_COLLAPSED, if collapsed { "true" } else { "false" });
        debug!(collapsed, "sidebar preference written");
        self.notify();
    }

    /// Flip the sidebar collapsed flag; returns the new value.
    pub fn toggle_panel(&mut self) -> bool {
        let next = !self.prefs.panel_collapsed;
        self.set_panel_collapsed(next);
        next
    }

    /// Register a callback run after every write.
    pub fn subscribe(&mut self, listener: impl FnMut(&UiPreferences) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Underlying storage.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn notify(&mut self) {
        let prefs = self.prefs;
        for listener in &mut self.listeners {
            listener(&prefs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn persisted_theme_wins_over_system_signal() {
        let backend = MemoryBackend::with_values([(KEY_THEME, "light")]);
        let asked = Cell::new(false);
        let store = PreferenceStore::load(backend, || {
            asked.set(true);
            true
        });
        assert_eq!(store.theme(), Theme::Light);
        assert!(!asked.get(), "system signal must not be read");
    }

    #[test]
    fn system_signal_used_without_persisted_theme() {
        let store = PreferenceStore::load(MemoryBackend::default(), || true);
        assert_eq!(store.theme(), Theme::Dark);
        let store = PreferenceStore::load(MemoryBackend::default(), || false);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn garbage_values_count_as_absent() {
        let backend =
            MemoryBackend::with_values([(KEY_THEME, "sepia"), (KEY_SIDEBAR_COLLAPSED, "yes")]);
        let store = PreferenceStore::load(backend, || true);
        assert_eq!(store.theme(), Theme::Dark);
        assert!(!store.panel_collapsed());
    }

    #[test]
    fn toggles_write_through() {
        let mut store = PreferenceStore::load(MemoryBackend::default(), || false);

        assert!(store.toggle_panel());
        assert_eq!(store.backend().get(KEY_SIDEBAR_COLLAPSED).as_deref(), Some("true"));
        assert!(!store.toggle_panel());
        assert_eq!(store.backend().get(KEY_SIDEBAR_COLLAPSED).as_deref(), Some("false"));

        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.backend().get(KEY_THEME).as_deref(), Some("dark"));
    }

    #[test]
    fn reload_restores_written_values() {
        let mut store = PreferenceStore::load(MemoryBackend::default(), || false);
        store.set_theme(Theme::Dark);
        store.set_panel_collapsed(true);

        let reloaded = PreferenceStore::load(store.backend().clone(), || false);
        assert_eq!(
            reloaded.preferences(),
            UiPreferences {
                panel_collapsed: true,
                theme: Theme::Dark
            }
        );
    }

    #[test]
    fn subscribers_see_every_write() {
        let seen = Rc::new(Cell::new(0));
        let mut store = PreferenceStore::load(MemoryBackend::default(), || false);
        let counter = Rc::clone(&seen);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.toggle_theme();
        store.set_theme(Theme::Dark);
        store.toggle_panel();
        assert_eq!(seen.get(), 3);
    }
}
