//! Catalog validation.
//!
//! The shell itself accepts any catalog (unknown ids resolve to "not found",
//! empty URLs to "configuration required"). This is where authors find out
//! about those cases before users do.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use url::Url;

use fleet_shell::catalog::CatalogConfig;
use fleet_shell::components::has_icon;

/// How bad an issue is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Shown to users as a degraded state
    Warning,
    /// Makes the catalog ambiguous
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    /// Warning or error
    pub severity: Severity,
    /// Report the issue is about, if any
    pub report: Option<String>,
    /// Human-readable description
    pub message: String,
}

impl CatalogIssue {
    fn error(report: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            report: report.map(str::to_string),
            message: message.into(),
        }
    }

    fn warning(report: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            report: report.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.report {
            Some(id) => write!(f, "{}: [{}] {}", self.severity, id, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Check a catalog; issues come back in catalog order.
pub fn check_catalog(config: &CatalogConfig) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut declared = HashSet::new();
    for category in &config.categories {
        if !declared.insert(category.id) {
            issues.push(CatalogIssue::warning(
                None,
                format!("category '{}' declared twice; the first entry is used", category.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for report in &config.reports {
        let id = report.id.as_str();
        if id.trim().is_empty() {
            issues.push(CatalogIssue::error(None, format!("report '{}' has an empty id", report.name)));
            continue;
        }
        if !seen.insert(id) {
            issues.push(CatalogIssue::error(Some(id), "duplicate report id"));
        }
        if report.name.trim().is_empty() {
            issues.push(CatalogIssue::error(Some(id), "empty name"));
        }
        if !declared.is_empty() && !declared.contains(&report.category) {
            issues.push(CatalogIssue::warning(
                Some(id),
                format!("category '{}' is not declared; a default entry is added", report.category),
            ));
        }
        if !report.icon_key.is_empty() && !has_icon(&report.icon_key) {
            issues.push(CatalogIssue::warning(
                Some(id),
                format!("unknown icon '{}'; the default icon is shown", report.icon_key),
            ));
        }
        issues.extend(check_view_url(id, &report.view_url));
    }

    if let Some(default) = config
        .default_report
        .as_deref()
        .filter(|default| !config.reports.iter().any(|r| r.id == *default))
    {
        issues.push(CatalogIssue::error(
            None,
            format!("default_report '{default}' is not in the catalog"),
        ));
    }

    issues
}

fn check_view_url(id: &str, view_url: &str) -> Option<CatalogIssue> {
    let view_url = view_url.trim();
    if view_url.is_empty() {
        return Some(CatalogIssue::warning(
            Some(id),
            "no view URL; users see a configuration hint",
        ));
    }
    match Url::parse(view_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(CatalogIssue::warning(
            Some(id),
            format!("view URL scheme '{}' is blocked by the page frame policy", url.scheme()),
        )),
        Err(err) => Some(CatalogIssue::warning(
            Some(id),
            format!("view URL does not parse ({err}); theme is applied textually"),
        )),
    }
}

/// Whether any issue is an error.
pub fn has_errors(issues: &[CatalogIssue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_shell::types::{CategoryConfig, CategoryId, Report};

    fn report(id: &str, name: &str, url: &str) -> Report {
        Report {
            id: id.into(),
            name: name.into(),
            category: CategoryId::Standard,
            view_url: url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn builtin_catalog_only_warns() {
        let issues = check_catalog(&CatalogConfig::builtin());
        assert!(!has_errors(&issues));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].report.as_deref(), Some("dashboard-4"));
    }

    #[test]
    fn duplicate_ids_and_empty_names_are_errors() {
        let config = CatalogConfig {
            reports: vec![
                report("a", "Trips", "http://x/d/a"),
                report("a", " ", "http://x/d/b"),
            ],
            ..Default::default()
        };
        let issues = check_catalog(&config);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["duplicate report id", "empty name"]);
        assert!(has_errors(&issues));
    }

    #[test]
    fn bad_urls_are_warnings() {
        let config = CatalogConfig {
            reports: vec![
                report("rel", "Relative", "/d/a?orgId=1"),
                report("ftp", "Ftp", "ftp://x/d/a"),
            ],
            ..Default::default()
        };
        let issues = check_catalog(&config);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues[1].message.contains("'ftp'"));
    }

    #[test]
    fn unknown_default_report_is_an_error() {
        let config = CatalogConfig {
            default_report: Some("ghost".into()),
            reports: vec![report("a", "Trips", "http://x/d/a")],
            ..Default::default()
        };
        let issues = check_catalog(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "error: default_report 'ghost' is not in the catalog");
    }

    #[test]
    fn undeclared_category_and_unknown_icon_warn() {
        let mut r = report("a", "Trips", "http://x/d/a");
        r.category = CategoryId::Video;
        r.icon_key = "Rocket".into();
        let config = CatalogConfig {
            categories: vec![
                CategoryConfig::builtin(CategoryId::Standard),
                CategoryConfig::builtin(CategoryId::Standard),
            ],
            reports: vec![r],
            ..Default::default()
        };
        let issues = check_catalog(&config);
        assert_eq!(issues.len(), 3);
        assert!(!has_errors(&issues));
        assert!(issues[0].message.contains("declared twice"));
        assert!(issues[1].message.contains("'video'"));
        assert!(issues[2].message.contains("'Rocket'"));
    }
}
