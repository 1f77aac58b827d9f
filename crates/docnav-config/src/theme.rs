//! `[theme]` section: navigation bar and sidebar tree.
//!
//! ```toml
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[theme.sidebar]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/guide/" },
//!     { text = "Installation", link = "/guide/installation" },
//! ]
//! ```
//!
//! Order of every list is display order and is preserved as written.

use serde::{Deserialize, Serialize};

/// Navigation bar and sidebar declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Top navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,
}

/// Entry in the top navigation bar.
///
/// `link` is either a site path starting with `/` or an external URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Display label.
    #[serde(alias = "label")]
    pub text: String,
    /// Target path or URL.
    pub link: String,
}

/// Labelled group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Group heading.
    #[serde(alias = "label")]
    pub text: String,
    /// Initial collapsed state. `None` means the group is not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<SidebarLink>,
}

/// Link inside a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarLink {
    /// Display label.
    #[serde(alias = "label")]
    pub text: String,
    /// Target path.
    pub link: String,
}
