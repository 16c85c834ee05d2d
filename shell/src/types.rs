//! Catalog data types for the navigation shell.
//!
//! These types define the static data model. They're designed to be:
//!
//! - **Serializable** - Loaded from TOML/JSON catalog files via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Build partial reports with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use fleet_shell::types::{CategoryId, Report};
//!
//! let report = Report {
//!     id: "trip".into(),
//!     name: "Trip Report".into(),
//!     category: CategoryId::Standard,
//!     view_url: "http://grafana.local/d/trip?orgId=1".into(),
//!     ..Default::default()
//! };
//! assert!(report.is_configured());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color scheme for the shell and for the embedded viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light scheme (the fallback when nothing else is known)
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

impl Theme {
    /// Lowercase label, as written to storage and to URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme implied by the system `prefers-color-scheme` signal.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Fixed set of report categories.
///
/// Declaration order is the default sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Driving violations (speeding, harsh braking, ...)
    Violations,
    /// General trip and activity reports
    Standard,
    /// Fuel consumption and refuelling
    Fuel,
    /// Cold-chain temperature monitoring
    Temperature,
    /// Dashcam and video events
    Video,
    /// Everything else
    #[default]
    Others,
}

impl CategoryId {
    /// All categories in declaration order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Violations,
        CategoryId::Standard,
        CategoryId::Fuel,
        CategoryId::Temperature,
        CategoryId::Video,
        CategoryId::Others,
    ];

    /// Lowercase identifier used in config files and DOM attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Violations => "violations",
            CategoryId::Standard => "standard",
            CategoryId::Fuel => "fuel",
            CategoryId::Temperature => "temperature",
            CategoryId::Video => "video",
            CategoryId::Others => "others",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Display metadata for a category group in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category identifier
    pub id: CategoryId,
    /// Human-readable group label
    pub label: String,
    /// Icon lookup key (see [`crate::components::icon_path`])
    #[serde(default)]
    pub icon_key: String,
    /// CSS color token, e.g. `"red"` -> `var(--cat-red)`
    #[serde(default)]
    pub color_token: String,
}

impl CategoryConfig {
    /// Default configuration for a category.
    pub fn builtin(id: CategoryId) -> Self {
        let (label, icon_key, color_token) = match id {
            CategoryId::Violations => ("Violations", "Warning", "red"),
            CategoryId::Standard => ("Standard Reports", "FileText", "blue"),
            CategoryId::Fuel => ("Fuel", "GasPump", "amber"),
            CategoryId::Temperature => ("Temperature", "Thermometer", "cyan"),
            CategoryId::Video => ("Video", "VideoCamera", "violet"),
            CategoryId::Others => ("Others", "BarChart3", "slate"),
        };
        Self {
            id,
            label: label.into(),
            icon_key: icon_key.into(),
            color_token: color_token.into(),
        }
    }
}

/// A catalog-defined pointer to an externally hosted visualization.
///
/// An empty `view_url` means the report exists but has not been configured
/// yet; the viewer renders a dedicated state for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier, used as the `reportId` query value
    pub id: String,
    /// Display name
    pub name: String,
    /// Category group
    pub category: CategoryId,
    /// External embed URL (empty = unconfigured)
    #[serde(default, alias = "grafana_url")]
    pub view_url: String,
    /// Short description shown as tooltip and used by search
    #[serde(default)]
    pub description: String,
    /// Icon lookup key
    #[serde(default)]
    pub icon_key: String,
}

impl Report {
    /// Whether the report has a view URL to embed.
    pub fn is_configured(&self) -> bool {
        !self.view_url.trim().is_empty()
    }
}

/// Brand text shown in the top bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Main title
    pub title: String,
    /// Subtitle under the title
    pub subtitle: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "MegaTech Trackers".into(),
            subtitle: "Fleet Management Dashboard".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn theme_from_system_signal() {
        assert_eq!(Theme::from_system(true), Theme::Dark);
        assert_eq!(Theme::from_system(false), Theme::Light);
    }

    #[test]
    fn category_ids_roundtrip_through_labels() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>(), Ok(id));
        }
        assert!("misc".parse::<CategoryId>().is_err());
    }

    #[test]
    fn category_deserializes_lowercase_only() {
        let ok: CategoryId = serde_json::from_str("\"fuel\"").unwrap();
        assert_eq!(ok, CategoryId::Fuel);
        assert!(serde_json::from_str::<CategoryId>("\"diesel\"").is_err());
    }

    #[test]
    fn report_accepts_legacy_grafana_url_key() {
        let report: Report = serde_json::from_str(
            r#"{"id":"r1","name":"Trip","category":"standard","grafana_url":"http://x/d/a"}"#,
        )
        .unwrap();
        assert_eq!(report.view_url, "http://x/d/a");
        assert!(report.is_configured());
    }

    #[test]
    fn blank_view_url_is_unconfigured() {
        let report = Report {
            view_url: "   ".into(),
            ..Default::default()
        };
        assert!(!report.is_configured());
    }
}
