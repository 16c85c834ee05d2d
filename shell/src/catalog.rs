//! Report catalog: the read-only set of reports the shell can show.
//!
//! A [`Catalog`] is built once at startup, either from the builtin fleet
//! reports or from a [`CatalogConfig`] file (TOML or JSON), and never mutated
//! afterwards.
//!
//! ```toml
//! default_report = "trip"
//!
//! [brand]
//! title = "MegaTech Trackers"
//! subtitle = "Fleet Management Dashboard"
//!
//! [[reports]]
//! id = "trip"
//! name = "Trip Report"
//! category = "standard"
//! view_url = "http://grafana.local/d/trip/trip-report?orgId=1&kiosk=true"
//! icon_key = "Route"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::CategoryIndex;
use crate::types::{Brand, CategoryConfig, CategoryId, Report};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for a catalog.
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
    /// The file is not valid JSON for a catalog.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// Unknown file extension.
    #[error("unsupported catalog format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// On-disk catalog document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Top bar brand text
    pub brand: Brand,
    /// Report shown when the location carries no `reportId`
    pub default_report: Option<String>,
    /// Category groups in sidebar order (empty = builtin order)
    pub categories: Vec<CategoryConfig>,
    /// Reports in declaration order
    pub reports: Vec<Report>,
}

impl CatalogConfig {
    /// Parse a TOML catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a catalog file, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Builtin catalog of the fleet reports.
    pub fn builtin() -> Self {
        let grafana = "http://10.10.0.122:8080/d";
        Self {
            brand: Brand::default(),
            default_report: None,
            categories: Vec::new(),
            reports: vec![
                Report {
                    id: "dashboard-1".into(),
                    name: "Trip Report".into(),
                    category: CategoryId::Standard,
                    view_url: format!(
                        "{grafana}/trip-report-dashboard/trip-report?orgId=1&timezone=browser&var-vehicle=FSD-7890&var-duration_min=5&refresh=1m&kiosk=true"
                    ),
                    description: "Detailed trip history and route analysis".into(),
                    icon_key: "Route".into(),
                },
                Report {
                    id: "dashboard-2".into(),
                    name: "Temperature Threshold Report".into(),
                    category: CategoryId::Temperature,
                    view_url: format!(
                        "{grafana}/temperature-threshold-report/temperature-threshold-report-by-vehicle?orgId=1&timezone=browser&var-vehicle=JWV-3417&refresh=30m&kiosk=true"
                    ),
                    description: "Real-time fleet status and location tracking".into(),
                    icon_key: "MapPin".into(),
                },
                Report {
                    id: "dashboard-3".into(),
                    name: "Origin To Destination Report".into(),
                    category: CategoryId::Standard,
                    view_url: format!(
                        "{grafana}/fence-wise-trip-report-dashboard/origin-to-destination-report?orgId=1&timezone=browser&var-vehicle=JW-3219&refresh=30m&kiosk=true"
                    ),
                    description: "Performance metrics and vehicle diagnostics".into(),
                    icon_key: "Activity".into(),
                },
                Report {
                    id: "dashboard-4".into(),
                    name: "Maintenance Schedule".into(),
                    category: CategoryId::Others,
                    view_url: String::new(),
                    description: "Vehicle maintenance alerts and scheduling".into(),
                    icon_key: "Wrench".into(),
                },
            ],
        }
    }

    /// Build the runtime catalog.
    pub fn catalog(&self) -> Catalog {
        let categories = if self.categories.is_empty() {
            CategoryId::ALL.into_iter().map(CategoryConfig::builtin).collect()
        } else {
            self.categories.clone()
        };
        Catalog::new(categories, self.reports.clone())
    }
}

/// Read-only report catalog with its category index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    reports: Vec<Report>,
    index: CategoryIndex,
}

impl Catalog {
    /// Build a catalog; see [`CategoryIndex::build`] for category handling.
    pub fn new(categories: Vec<CategoryConfig>, reports: Vec<Report>) -> Self {
        let index = CategoryIndex::build(categories, &reports);
        Self { reports, index }
    }

    /// Look up a report by id. `None` is the "not found" outcome.
    pub fn get_report(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// All reports in declaration order.
    pub fn list_reports(&self) -> &[Report] {
        &self.reports
    }

    /// All categories in sidebar order.
    pub fn list_categories(&self) -> &[CategoryConfig] {
        self.index.categories()
    }

    /// Reports of one category, in declaration order.
    pub fn list_reports_by_category(&self, id: CategoryId) -> impl Iterator<Item = &Report> + '_ {
        self.index.positions(id).iter().map(|&pos| &self.reports[pos])
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the catalog has no reports.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
default_report = "r1"

[brand]
title = "Acme Fleet"

[[categories]]
id = "standard"
label = "Standard"
icon_key = "FileText"
color_token = "blue"

[[categories]]
id = "fuel"
label = "Fuel"

[[reports]]
id = "r1"
name = "Trips"
category = "standard"
view_url = "http://x/d/a?orgId=1"

[[reports]]
id = "r2"
name = "Fuel Level"
category = "fuel"
view_url = ""

[[reports]]
id = "r3"
name = "Stops"
category = "standard"
"#;

    #[test]
    fn parses_toml_catalog() {
        let config = CatalogConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.brand.title, "Acme Fleet");
        assert_eq!(config.brand.subtitle, Brand::default().subtitle);
        assert_eq!(config.default_report.as_deref(), Some("r1"));
        assert_eq!(config.reports.len(), 3);
        assert!(!config.reports[1].is_configured());
    }

    #[test]
    fn rejects_unknown_category() {
        let bad = r#"
[[reports]]
id = "x"
name = "X"
category = "misc"
"#;
        assert!(matches!(
            CatalogConfig::from_toml_str(bad),
            Err(CatalogError::Toml(_))
        ));
    }

    #[test]
    fn get_report_and_not_found() {
        let catalog = CatalogConfig::from_toml_str(SAMPLE).unwrap().catalog();
        assert_eq!(catalog.get_report("r2").map(|r| r.name.as_str()), Some("Fuel Level"));
        assert!(catalog.get_report("ghost").is_none());
    }

    #[test]
    fn list_reports_keeps_declaration_order() {
        let catalog = CatalogConfig::from_toml_str(SAMPLE).unwrap().catalog();
        let ids: Vec<_> = catalog.list_reports().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn by_category_filters_in_order() {
        let catalog = CatalogConfig::from_toml_str(SAMPLE).unwrap().catalog();
        let standard: Vec<_> = catalog
            .list_reports_by_category(CategoryId::Standard)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(standard, vec!["r1", "r3"]);
        assert_eq!(catalog.list_reports_by_category(CategoryId::Video).count(), 0);
    }

    #[test]
    fn categories_partition_the_catalog() {
        for config in [CatalogConfig::builtin(), CatalogConfig::from_toml_str(SAMPLE).unwrap()] {
            let catalog = config.catalog();
            let mut union: Vec<&Report> = Vec::new();
            for cat in catalog.list_categories() {
                union.extend(catalog.list_reports_by_category(cat.id));
            }
            assert_eq!(union.len(), catalog.len());
            for report in catalog.list_reports() {
                assert_eq!(union.iter().filter(|r| r.id == report.id).count(), 1);
            }
        }
    }

    #[test]
    fn builtin_uses_full_category_list() {
        let catalog = CatalogConfig::builtin().catalog();
        assert_eq!(catalog.list_categories().len(), CategoryId::ALL.len());
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.get_report("dashboard-4").unwrap().is_configured());
    }

    #[test]
    fn json_catalog_matches_toml_shape() {
        let json = r#"{"reports":[{"id":"j1","name":"J","category":"video"}]}"#;
        let catalog = CatalogConfig::from_json_str(json).unwrap().catalog();
        assert_eq!(catalog.list_reports_by_category(CategoryId::Video).count(), 1);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let toml_path = dir.path().join("catalog.toml");
        std::fs::write(&toml_path, SAMPLE).unwrap();
        let json_path = dir.path().join("catalog.json");
        std::fs::write(
            &json_path,
            serde_json::to_string(&CatalogConfig::from_toml_str(SAMPLE).unwrap()).unwrap(),
        )
        .unwrap();

        let from_toml = CatalogConfig::load(&toml_path).unwrap();
        let from_json = CatalogConfig::load(&json_path).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "reports: []").unwrap();
        let result = CatalogConfig::load(&path);
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = CatalogConfig::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
