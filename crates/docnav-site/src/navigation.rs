//! Resolved navigation handed to the site renderer.
//!
//! Internal links get the site base path applied; external links pass
//! through unchanged. Order of every list is kept as declared.

use docnav_config::{Config, SidebarGroup};
use serde::Serialize;

use crate::link::{LinkKind, classify, with_base};

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target, base path applied for internal links.
    pub path: String,
    /// True if the link leaves the site.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    /// Initial collapsed state for sidebar groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn link(title: &str, link: &str, base: &str) -> Self {
        let kind = classify(link);
        let path = match kind {
            LinkKind::Internal(path) => with_base(base, path),
            LinkKind::External(url) | LinkKind::Invalid(url) => url.to_owned(),
        };
        Self {
            title: title.to_owned(),
            path,
            external: kind.is_external(),
            collapsed: None,
            children: Vec::new(),
        }
    }

    fn group(group: &SidebarGroup, base: &str) -> Self {
        Self {
            title: group.text.clone(),
            path: String::new(),
            external: false,
            collapsed: group.collapsed,
            children: group
                .items
                .iter()
                .map(|i| Self::link(&i.text, &i.link, base))
                .collect(),
        }
    }
}

/// Output format for [`SiteNavigation::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Error returned when serializing navigation fails.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Site metadata plus resolved navigation bar and sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteNavigation {
    pub title: String,
    pub description: String,
    pub base: String,
    pub out_dir: String,
    /// Top navigation bar.
    pub nav: Vec<NavItem>,
    /// Sidebar groups; each group's links are its children.
    pub sidebar: Vec<NavItem>,
}

impl SiteNavigation {
    /// Resolve the descriptor in `config`.
    #[must_use]
    pub fn build(config: &Config) -> Self {
        let base = config.site.base.as_str();
        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            base: base.to_owned(),
            out_dir: config.out_dir_resolved.display().to_string(),
            nav: config
                .theme
                .nav
                .iter()
                .map(|e| NavItem::link(&e.text, &e.link, base))
                .collect(),
            sidebar: config
                .theme
                .sidebar
                .iter()
                .map(|g| NavItem::group(g, base))
                .collect(),
        }
    }

    /// Serialize for the site renderer.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if serialization fails.
    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        Ok(match format {
            ExportFormat::Json => serde_json::to_string_pretty(self)?,
            ExportFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }
}
