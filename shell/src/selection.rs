//! Selection controller: the single source of truth for the active report.
//!
//! The location's `reportId` parameter is the ground truth. The controller
//! only ever derives its [`Selection`] by resolving that parameter against
//! the catalog, both after its own in-place writes and after out-of-band
//! navigation (address bar edits, back/forward, another tab's shared link).
//!
//! ```rust
//! use std::sync::Arc;
//! use fleet_shell::catalog::CatalogConfig;
//! use fleet_shell::location::{Location, MemoryLocation};
//! use fleet_shell::selection::{Selection, SelectionController};
//!
//! let catalog = Arc::new(CatalogConfig::builtin().catalog());
//! let mut controller = SelectionController::new(catalog.clone(), MemoryLocation::new(""), None);
//! assert_eq!(controller.initialize_from_location(), &Selection::NoneSelected);
//!
//! let trip = catalog.get_report("dashboard-1").unwrap();
//! controller.select(trip);
//! assert_eq!(controller.location().query(), "reportId=dashboard-1");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::location::{Location, report_id_from_query, with_report_id};
use crate::types::Report;

/// Resolved selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// No report id anywhere
    #[default]
    NoneSelected,
    /// Id resolved to a catalog entry
    Active(Report),
    /// Id present in the location but unknown to the catalog
    Unresolved(String),
}

impl Selection {
    /// Id of the active report, if one resolved.
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Selection::Active(report) => Some(report.id.as_str()),
            _ => None,
        }
    }

    /// The active report, if one resolved.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Selection::Active(report) => Some(report),
            _ => None,
        }
    }

    /// Id requested by the location, resolved or not.
    pub fn requested_id(&self) -> Option<&str> {
        match self {
            Selection::Active(report) => Some(report.id.as_str()),
            Selection::Unresolved(id) => Some(id.as_str()),
            Selection::NoneSelected => None,
        }
    }
}

/// Resolve a query string against the catalog.
///
/// The `reportId` parameter wins; `default_id` is used only when the
/// parameter is absent or empty. Unknown ids resolve to
/// [`Selection::Unresolved`], never to [`Selection::NoneSelected`].
pub fn resolve(catalog: &Catalog, query: &str, default_id: Option<&str>) -> Selection {
    let requested = report_id_from_query(query).or_else(|| {
        default_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    });
    match requested {
        None => Selection::NoneSelected,
        Some(id) => match catalog.get_report(&id) {
            Some(report) => Selection::Active(report.clone()),
            None => Selection::Unresolved(id),
        },
    }
}

type SelectionListener = Box<dyn FnMut(&Selection)>;

/// Owner of the active report.
///
/// All transitions go through [`select`](Self::select) or
/// [`on_external_location_change`](Self::on_external_location_change); both
/// converge on reading the location, so the last location write wins.
pub struct SelectionController<L> {
    catalog: Arc<Catalog>,
    location: L,
    default_id: Option<String>,
    selection: Selection,
    /// Optimistic "last clicked" id; cleared when the observed query changes.
    pending: Option<String>,
    observed_query: String,
    listeners: Vec<SelectionListener>,
}

impl<L: fmt::Debug> fmt::Debug for SelectionController<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("location", &self.location)
            .field("default_id", &self.default_id)
            .field("selection", &self.selection)
            .field("pending", &self.pending)
            .field("observed_query", &self.observed_query)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<L: Location> SelectionController<L> {
    /// Create a controller. Call
    /// [`initialize_from_location`](Self::initialize_from_location) before
    /// reading the selection.
    pub fn new(catalog: Arc<Catalog>, location: L, default_id: Option<String>) -> Self {
        Self {
            catalog,
            location,
            default_id,
            selection: Selection::NoneSelected,
            pending: None,
            observed_query: String::new(),
            listeners: Vec::new(),
        }
    }

    /// Resolve the startup selection from the location.
    pub fn initialize_from_location(&mut self) -> &Selection {
        let query = self.location.query();
        self.pending = None;
        self.apply(&query);
        &self.selection
    }

    /// Make `report` active with an in-place location update.
    ///
    /// The history entry is replaced, never pushed. If the location rejects
    /// the write, the selection stays on whatever the location still says and
    /// only the optimistic [`pending`](Self::pending) id reflects the click.
    /// A write that lands clears the pending id.
    pub fn select(&mut self, report: &Report) {
        let query = with_report_id(&self.location.query(), &report.id);
        let written = match self.location.replace_query(&query) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, report = %report.id, "location rejected selection update");
                false
            }
        };
        let current = self.location.query();
        self.pending = if written && current == query {
            None
        } else {
            Some(report.id.clone())
        };
        self.apply(&current);
    }

    /// React to the location changing outside the controller.
    ///
    /// `query` is the location's new query string. It takes precedence over
    /// any pending local click.
    pub fn on_external_location_change(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query != self.observed_query {
            self.pending = None;
        }
        self.apply(query);
    }

    /// Re-read the owned location and reconcile with it.
    pub fn sync_with_location(&mut self) {
        let query = self.location.query();
        self.on_external_location_change(&query);
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Id of the active report, if any.
    pub fn active_report_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    /// Optimistic id of the last local click not yet superseded by a
    /// location change.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// The catalog selections resolve against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The owned location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the owned location, for hosts that drive navigation.
    ///
    /// Changes made here are picked up by
    /// [`sync_with_location`](Self::sync_with_location).
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Register a callback run whenever the selection changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&Selection) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn apply(&mut self, query: &str) {
        self.observed_query = query.to_string();
        let next = resolve(&self.catalog, query, self.default_id.as_deref());
        if next == self.selection {
            return;
        }
        debug!(
            from = ?self.selection.requested_id(),
            to = ?next.requested_id(),
            "selection changed"
        );
        self.selection = next;
        let selection = self.selection.clone();
        for listener in &mut self.listeners {
            listener(&selection);
        }
    }
}
