//! Link integrity: every internal link must have a content page.

use docnav_config::ThemeConfig;
use glob::Pattern;

use crate::content::ContentIndex;
use crate::diagnostic::{Diagnostic, Location, Rule};
use crate::link::{LinkKind, classify, page_key};

/// Check every internal nav and sidebar link against `index`.
///
/// Links matching an `ignore` pattern are skipped. External and invalid
/// links are left to [`lint`](crate::lint).
#[must_use]
pub fn check_links(
    theme: &ThemeConfig,
    index: &ContentIndex,
    ignore: &[Pattern],
) -> Vec<Diagnostic> {
    let nav = theme
        .nav
        .iter()
        .enumerate()
        .map(|(index, e)| (Location::Nav { index }, e.link.as_str()));
    let sidebar = theme.sidebar.iter().enumerate().flat_map(|(group, g)| {
        g.items
            .iter()
            .enumerate()
            .map(move |(item, i)| (Location::SidebarItem { group, item }, i.link.as_str()))
    });

    nav.chain(sidebar)
        .filter_map(|(location, link)| check_one(location, link, index, ignore))
        .collect()
}

fn check_one(
    location: Location,
    link: &str,
    index: &ContentIndex,
    ignore: &[Pattern],
) -> Option<Diagnostic> {
    let LinkKind::Internal(path) = classify(link) else {
        return None;
    };

    if ignore.iter().any(|p| p.matches(path)) {
        tracing::debug!(link = %path, "Link ignored by pattern");
        return None;
    }

    let key = page_key(path);
    if index.contains(&key) {
        return None;
    }

    Some(Diagnostic::error(
        Rule::BrokenLink,
        location,
        format!(
            "{path} has no page (expected {} in {})",
            expected_sources(&key),
            index.root().display()
        ),
    ))
}

/// Files that would satisfy `key`, for error messages.
fn expected_sources(key: &str) -> String {
    if key.is_empty() {
        "index.md".to_owned()
    } else {
        format!("{key}.md or {key}/index.md")
    }
}
