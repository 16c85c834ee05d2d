//! Viewer frame: what the main area shows for a given selection and theme.
//!
//! The embedded viewer is third-party content the shell does not control.
//! It is only ever placed in an iframe restricted by [`EMBED_SANDBOX`], and
//! its load outcome is not observable beyond the frame's load event.

use serde::Serialize;

use crate::selection::Selection;
use crate::theme::apply_theme;
use crate::types::{Report, Theme};

/// iframe `sandbox` value: scripts, same-origin, forms and popups only.
pub const EMBED_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

/// A sandboxed embed of one report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedFrame {
    /// Report being shown
    pub report_id: String,
    /// iframe title
    pub title: String,
    /// Theme-rewritten view URL
    pub src: String,
    /// Identity of this embed instance; a new key means a full reload
    pub key: String,
}

/// Render state of the main area, in priority order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewerState {
    /// Nothing requested: onboarding message
    Empty,
    /// Requested id unknown to the catalog
    NotFound {
        /// The id from the location
        id: String,
    },
    /// Report exists but has no view URL
    Misconfigured {
        /// The unconfigured report
        report: Report,
    },
    /// Report embedded in a sandboxed frame
    Embed {
        /// Frame parameters
        frame: EmbedFrame,
    },
}

impl ViewerState {
    /// Derive the render state for `selection` under `theme`.
    pub fn resolve(selection: &Selection, theme: Theme) -> Self {
        match selection {
            Selection::NoneSelected => ViewerState::Empty,
            Selection::Unresolved(id) => ViewerState::NotFound { id: id.clone() },
            Selection::Active(report) if !report.is_configured() => ViewerState::Misconfigured {
                report: report.clone(),
            },
            Selection::Active(report) => {
                let src = apply_theme(report.view_url.trim(), theme);
                ViewerState::Embed {
                    frame: EmbedFrame {
                        report_id: report.id.clone(),
                        title: report.name.clone(),
                        key: frame_key(&report.id, &src),
                        src,
                    },
                }
            }
        }
    }

    /// Frame key when embedding.
    pub fn frame_key(&self) -> Option<&str> {
        match self {
            ViewerState::Embed { frame } => Some(frame.key.as_str()),
            _ => None,
        }
    }

    /// Short state label, also used as a CSS modifier.
    pub fn label(&self) -> &'static str {
        match self {
            ViewerState::Empty => "empty",
            ViewerState::NotFound { .. } => "not-found",
            ViewerState::Misconfigured { .. } => "misconfigured",
            ViewerState::Embed { .. } => "embed",
        }
    }
}

/// Key identifying one embed instance of `report_id` at `src`.
pub fn frame_key(report_id: &str, src: &str) -> String {
    format!("{report_id}|{src}")
}

/// Tracks the mounted embed and its loading overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerFrame {
    key: Option<String>,
    loading: bool,
}

impl ViewerFrame {
    /// Reconcile with a new render state.
    ///
    /// Returns `true` when the embed must be (re)mounted: the frame key
    /// changed. Mounting re-arms the loading overlay.
    pub fn update(&mut self, state: &ViewerState) -> bool {
        match state.frame_key() {
            Some(key) if self.key.as_deref() == Some(key) => false,
            Some(key) => {
                self.key = Some(key.to_string());
                self.loading = true;
                true
            }
            None => {
                self.key = None;
                self.loading = false;
                false
            }
        }
    }

    /// Load signal from the frame identified by `key`.
    ///
    /// Signals from frames that were already replaced are ignored.
    pub fn frame_loaded(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.loading = false;
        }
    }

    /// Whether the loading overlay is visible.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Key of the mounted embed.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
