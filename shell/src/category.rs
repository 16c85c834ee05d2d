//! Category index: ordered category groups and their report membership.

use std::collections::HashMap;

use crate::types::{CategoryConfig, CategoryId, Report};

/// Groups catalog entries by category.
///
/// Membership is stored as positions into the catalog's report list, so
/// per-category listings keep catalog declaration order.
#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
    categories: Vec<CategoryConfig>,
    members: HashMap<CategoryId, Vec<usize>>,
}

impl CategoryIndex {
    /// Build the index for `reports`.
    ///
    /// Categories keep the given order. A category referenced by a report but
    /// missing from `categories` is appended with its builtin configuration,
    /// so no report is ever left ungrouped. Duplicate category entries keep
    /// the first occurrence.
    pub fn build(categories: Vec<CategoryConfig>, reports: &[Report]) -> Self {
        let mut ordered: Vec<CategoryConfig> = Vec::with_capacity(categories.len());
        for cat in categories {
            if !ordered.iter().any(|c| c.id == cat.id) {
                ordered.push(cat);
            }
        }

        let mut members: HashMap<CategoryId, Vec<usize>> = HashMap::new();
        for (pos, report) in reports.iter().enumerate() {
            if !ordered.iter().any(|c| c.id == report.category) {
                ordered.push(CategoryConfig::builtin(report.category));
            }
            members.entry(report.category).or_default().push(pos);
        }

        Self {
            categories: ordered,
            members,
        }
    }

    /// Ordered category list, including empty categories.
    pub fn categories(&self) -> &[CategoryConfig] {
        &self.categories
    }

    /// Configuration for one category.
    pub fn category(&self, id: CategoryId) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Catalog positions of the reports in `id`, in declaration order.
    pub fn positions(&self, id: CategoryId) -> &[usize] {
        self.members.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of reports in `id`.
    pub fn count(&self, id: CategoryId) -> usize {
        self.positions(id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, category: CategoryId) -> Report {
        Report {
            id: id.into(),
            name: id.to_uppercase(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn keeps_declared_order_and_empty_categories() {
        let reports = vec![report("a", CategoryId::Fuel)];
        let index = CategoryIndex::build(
            vec![
                CategoryConfig::builtin(CategoryId::Video),
                CategoryConfig::builtin(CategoryId::Fuel),
            ],
            &reports,
        );

        let ids: Vec<_> = index.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CategoryId::Video, CategoryId::Fuel]);
        assert_eq!(index.count(CategoryId::Video), 0);
        assert_eq!(index.positions(CategoryId::Fuel), &[0]);
    }

    #[test]
    fn appends_undeclared_categories() {
        let reports = vec![report("a", CategoryId::Standard), report("b", CategoryId::Others)];
        let index = CategoryIndex::build(vec![CategoryConfig::builtin(CategoryId::Standard)], &reports);

        let ids: Vec<_> = index.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CategoryId::Standard, CategoryId::Others]);
        assert_eq!(index.category(CategoryId::Others).map(|c| c.label.as_str()), Some("Others"));
    }

    #[test]
    fn duplicate_category_entries_keep_first() {
        let mut custom = CategoryConfig::builtin(CategoryId::Fuel);
        custom.label = "Diesel".into();
        let index = CategoryIndex::build(vec![custom, CategoryConfig::builtin(CategoryId::Fuel)], &[]);

        assert_eq!(index.categories().len(), 1);
        assert_eq!(index.categories()[0].label, "Diesel");
    }

    #[test]
    fn membership_preserves_declaration_order() {
        let reports = vec![
            report("t1", CategoryId::Temperature),
            report("f1", CategoryId::Fuel),
            report("t2", CategoryId::Temperature),
        ];
        let index = CategoryIndex::build(Vec::new(), &reports);

        assert_eq!(index.positions(CategoryId::Temperature), &[0, 2]);
        assert_eq!(index.positions(CategoryId::Violations), &[] as &[usize]);
    }
}
