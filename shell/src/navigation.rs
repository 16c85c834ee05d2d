//! Navigation panel model: category groups, highlight, expansion, search.
//!
//! The panel never decides which report is active; it reads the
//! [`Selection`] and forwards clicks to the selection controller. It owns
//! only transient UI state: which category groups are open and the search
//! filter. The sidebar width toggle goes through the preference store.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::preferences::{PreferenceBackend, PreferenceStore};
use crate::selection::Selection;
use crate::types::{CategoryConfig, CategoryId, Report};

/// One report row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// The report
    pub report: Report,
    /// Resolved active report
    pub active: bool,
    /// Clicked locally, location not updated yet
    pub pending: bool,
}

/// One category group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Category metadata
    pub category: CategoryConfig,
    /// Whether the group is open
    pub expanded: bool,
    /// Rows, in catalog order (filtered when a search is active)
    pub items: Vec<NavItem>,
}

/// Everything the sidebar renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavModel {
    /// Narrow icon-only sidebar
    pub collapsed: bool,
    /// Current search text
    pub filter: String,
    /// Total reports in the catalog (footer)
    pub total_reports: usize,
    /// Groups in category order
    pub groups: Vec<NavGroup>,
}

/// Transient navigation state.
#[derive(Clone, Debug, Default)]
pub struct NavigationPanel {
    expanded: HashSet<CategoryId>,
    filter: String,
}

impl NavigationPanel {
    /// All groups closed, no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or close a category group.
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Whether a group is open.
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.contains(&id)
    }

    /// Open the group holding the active report.
    ///
    /// Called after every selection change, so navigating to a report in a
    /// closed group (click, shared link, back button) reveals it.
    pub fn sync_selection(&mut self, selection: &Selection) {
        if let Selection::Active(report) = selection {
            self.expanded.insert(report.category);
        }
    }

    /// Handle a click on a report row.
    ///
    /// Returns the report to hand to the selection controller, or `None` for
    /// ids the catalog does not know.
    pub fn request_select<'c>(&mut self, catalog: &'c Catalog, id: &str) -> Option<&'c Report> {
        let report = catalog.get_report(id)?;
        self.expanded.insert(report.category);
        Some(report)
    }

    /// Flip the sidebar width; persisted through the preference store.
    pub fn toggle_collapsed<B: PreferenceBackend>(&self, prefs: &mut PreferenceStore<B>) -> bool {
        prefs.toggle_panel()
    }

    /// Set the search text. Whitespace-only text clears the filter.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.trim().to_string();
    }

    /// Current search text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Build the sidebar model.
    ///
    /// With a filter, only matching rows are listed, groups without matches
    /// are dropped, and the remaining groups show open.
    pub fn model(
        &self,
        catalog: &Catalog,
        selection: &Selection,
        pending: Option<&str>,
        collapsed: bool,
    ) -> NavModel {
        let needle = self.filter.to_lowercase();
        let active_id = selection.active_id();

        let groups = catalog
            .list_categories()
            .iter()
            .filter_map(|category| {
                let items: Vec<NavItem> = catalog
                    .list_reports_by_category(category.id)
                    .filter(|report| needle.is_empty() || matches_filter(report, &needle))
                    .map(|report| {
                        let active = active_id == Some(report.id.as_str());
                        NavItem {
                            active,
                            pending: !active && pending == Some(report.id.as_str()),
                            report: report.clone(),
                        }
                    })
                    .collect();

                if !needle.is_empty() && items.is_empty() {
                    return None;
                }
                Some(NavGroup {
                    category: category.clone(),
                    expanded: !needle.is_empty() || self.is_expanded(category.id),
                    items,
                })
            })
            .collect();

        NavModel {
            collapsed,
            filter: self.filter.clone(),
            total_reports: catalog.len(),
            groups,
        }
    }
}

fn matches_filter(report: &Report, needle: &str) -> bool {
    report.name.to_lowercase().contains(needle) || report.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{KEY_SIDEBAR_COLLAPSED, MemoryBackend};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CategoryConfig::builtin(CategoryId::Standard),
                CategoryConfig::builtin(CategoryId::Fuel),
                CategoryConfig::builtin(CategoryId::Video),
            ],
            vec![
                Report {
                    id: "r1".into(),
                    name: "Trip Report".into(),
                    category: CategoryId::Standard,
                    view_url: "http://x/d/a?orgId=1".into(),
                    description: "Route analysis".into(),
                    ..Default::default()
                },
                Report {
                    id: "r2".into(),
                    name: "Fuel Level".into(),
                    category: CategoryId::Fuel,
                    ..Default::default()
                },
            ],
        )
    }

    #[test]
    fn selecting_in_collapsed_category_expands_it() {
        let catalog = catalog();
        let mut panel = NavigationPanel::new();
        assert!(!panel.is_expanded(CategoryId::Fuel));

        let report = panel.request_select(&catalog, "r2").unwrap();
        assert_eq!(report.id, "r2");
        assert!(panel.is_expanded(CategoryId::Fuel));
    }

    #[test]
    fn url_driven_selection_expands_category() {
        let catalog = catalog();
        let mut panel = NavigationPanel::new();
        panel.sync_selection(&Selection::Active(catalog.get_report("r1").unwrap().clone()));
        assert!(panel.is_expanded(CategoryId::Standard));

        panel.sync_selection(&Selection::Unresolved("ghost".into()));
        assert!(!panel.is_expanded(CategoryId::Video));
    }

    #[test]
    fn unknown_click_is_ignored() {
        let mut panel = NavigationPanel::new();
        assert!(panel.request_select(&catalog(), "ghost").is_none());
    }

    #[test]
    fn toggle_category_flips() {
        let mut panel = NavigationPanel::new();
        panel.toggle_category(CategoryId::Video);
        assert!(panel.is_expanded(CategoryId::Video));
        panel.toggle_category(CategoryId::Video);
        assert!(!panel.is_expanded(CategoryId::Video));
    }

    #[test]
    fn unresolved_selection_highlights_nothing() {
        let catalog = catalog();
        let model = NavigationPanel::new().model(
            &catalog,
            &Selection::Unresolved("ghost".into()),
            None,
            false,
        );
        assert!(model.groups.iter().flat_map(|g| &g.items).all(|i| !i.active));
    }

    #[test]
    fn highlights_exactly_the_active_report() {
        let catalog = catalog();
        let selection = Selection::Active(catalog.get_report("r2").unwrap().clone());
        let model = NavigationPanel::new().model(&catalog, &selection, Some("r1"), false);

        let active: Vec<_> = model
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .filter(|i| i.active)
            .map(|i| i.report.id.as_str())
            .collect();
        assert_eq!(active, vec!["r2"]);
        let pending: Vec<_> = model
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .filter(|i| i.pending)
            .map(|i| i.report.id.as_str())
            .collect();
        assert_eq!(pending, vec!["r1"]);
    }

    #[test]
    fn model_keeps_empty_categories_without_filter() {
        let model = NavigationPanel::new().model(&catalog(), &Selection::NoneSelected, None, true);
        assert!(model.collapsed);
        assert_eq!(model.total_reports, 2);
        assert_eq!(model.groups.len(), 3);
        assert!(model.groups[2].items.is_empty());
    }

    #[test]
    fn filter_matches_name_and_description() {
        let catalog = catalog();
        let mut panel = NavigationPanel::new();

        panel.set_filter("  ROUTE ");
        let model = panel.model(&catalog, &Selection::NoneSelected, None, false);
        assert_eq!(model.filter, "ROUTE");
        assert_eq!(model.groups.len(), 1);
        assert!(model.groups[0].expanded);
        assert_eq!(model.groups[0].items[0].report.id, "r1");

        panel.set_filter("nothing matches");
        assert!(panel.model(&catalog, &Selection::NoneSelected, None, false).groups.is_empty());

        panel.set_filter("   ");
        assert_eq!(panel.model(&catalog, &Selection::NoneSelected, None, false).groups.len(), 3);
    }

    #[test]
    fn width_toggle_persists() {
        let mut prefs = PreferenceStore::load(MemoryBackend::default(), || false);
        let panel = NavigationPanel::new();
        assert!(panel.toggle_collapsed(&mut prefs));
        assert_eq!(prefs.backend().get(KEY_SIDEBAR_COLLAPSED).as_deref(), Some("true"));
    }
}
