//! Authoring-hygiene checks on the navigation tree.
//!
//! These checks only look at the descriptor itself. Whether a path actually
//! has a page is decided by [`check_links`](crate::check_links).

use std::collections::HashMap;

use docnav_config::ThemeConfig;

use crate::diagnostic::{Diagnostic, Location, Rule};
use crate::link::{LinkKind, classify};

/// Run every hygiene rule over `theme`, in declaration order.
#[must_use]
pub fn lint(theme: &ThemeConfig) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    lint_nav(theme, &mut out);
    lint_sidebar(theme, &mut out);
    out
}

fn lint_nav(theme: &ThemeConfig, out: &mut Vec<Diagnostic>) {
    let mut seen = Labels::default();

    for (index, entry) in theme.nav.iter().enumerate() {
        let location = Location::Nav { index };
        check_label(&entry.text, location, out);

        if let LinkKind::Invalid(link) = classify(&entry.link) {
            out.push(Diagnostic::error(
                Rule::UnrootedLink,
                location,
                format!("link {link:?} must start with '/' or be a full URL"),
            ));
        }

        if let Some(first) = seen.insert(&entry.text, index) {
            out.push(duplicate(&entry.text, location, Location::Nav { index: first }));
        }
    }
}

fn lint_sidebar(theme: &ThemeConfig, out: &mut Vec<Diagnostic>) {
    let mut groups = Labels::default();

    for (group, sidebar_group) in theme.sidebar.iter().enumerate() {
        let location = Location::SidebarGroup { group };
        check_label(&sidebar_group.text, location, out);

        if sidebar_group.items.is_empty() {
            out.push(Diagnostic::error(
                Rule::EmptyGroup,
                location,
                format!("group {:?} has no items", sidebar_group.text),
            ));
        }

        if let Some(first) = groups.insert(&sidebar_group.text, group) {
            out.push(duplicate(
                &sidebar_group.text,
                location,
                Location::SidebarGroup { group: first },
            ));
        }

        let mut items = Labels::default();
        for (item, link) in sidebar_group.items.iter().enumerate() {
            let location = Location::SidebarItem { group, item };
            check_label(&link.text, location, out);

            match classify(&link.link) {
                LinkKind::Internal(_) => {}
                LinkKind::External(url) => out.push(Diagnostic::warning(
                    Rule::ExternalSidebarLink,
                    location,
                    format!("sidebar link {url:?} leaves the site"),
                )),
                LinkKind::Invalid(link) => out.push(Diagnostic::error(
                    Rule::UnrootedLink,
                    location,
                    format!("link {link:?} must start with '/'"),
                )),
            }

            if let Some(first) = items.insert(&link.text, item) {
                out.push(duplicate(
                    &link.text,
                    location,
                    Location::SidebarItem { group, item: first },
                ));
            }
        }
    }
}

fn check_label(label: &str, location: Location, out: &mut Vec<Diagnostic>) {
    if label.trim().is_empty() {
        out.push(Diagnostic::error(
            Rule::EmptyLabel,
            location,
            "label cannot be empty",
        ));
    }
}

fn duplicate(label: &str, location: Location, first: Location) -> Diagnostic {
    Diagnostic::warning(
        Rule::DuplicateLabel,
        location,
        format!("label {label:?} repeats {first}"),
    )
}

/// First position of each non-empty label in one list.
#[derive(Default)]
struct Labels<'a> {
    first: HashMap<&'a str, usize>,
}

impl<'a> Labels<'a> {
    /// Record `label` at `index`, returning the earlier index if it was seen.
    fn insert(&mut self, label: &'a str, index: usize) -> Option<usize> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        match self.first.get(label) {
            Some(&first) => Some(first),
            None => {
                self.first.insert(label, index);
                None
            }
        }
    }
}
