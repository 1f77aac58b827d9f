//! Full check run over a loaded descriptor.

use docnav_config::Config;

use crate::content::{ContentIndex, compile_patterns};
use crate::diagnostic::Report;
use crate::lint::lint;
use crate::links::check_links;

/// Runs lint and, when enabled, link integrity for one descriptor.
pub struct Checker<'a> {
    config: &'a Config,
}

impl<'a> Checker<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Run all checks. Findings keep declaration order, lint first.
    #[must_use]
    pub fn check(&self) -> Report {
        let theme = &self.config.theme;
        let mut report = Report::new(lint(theme));

        if self.config.check.links {
            let content = &self.config.content_resolved;
            let exclude = compile_patterns(&content.exclude);
            let index = ContentIndex::scan(&content.dir, &exclude);
            let ignore = compile_patterns(&self.config.check.ignore);
            report.extend(check_links(theme, &index, &ignore));
        } else {
            tracing::debug!("Link integrity check disabled");
        }

        tracing::info!(
            nav = theme.nav.len(),
            groups = theme.sidebar.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Navigation check finished"
        );

        report
    }
}
