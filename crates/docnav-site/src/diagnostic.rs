//! Findings reported by lint and link checking.

use std::fmt;

use serde::Serialize;

/// How serious a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Which check produced a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Label is empty or whitespace.
    EmptyLabel,
    /// Link neither starts with `/` nor is a fully-qualified URL.
    UnrootedLink,
    /// Sidebar group has no items.
    EmptyGroup,
    /// Label repeats within the same list.
    DuplicateLabel,
    /// Sidebar item points outside the site.
    ExternalSidebarLink,
    /// Internal link has no matching content page.
    BrokenLink,
}

impl Rule {
    /// Stable identifier printed next to findings.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyLabel => "empty-label",
            Self::UnrootedLink => "unrooted-link",
            Self::EmptyGroup => "empty-group",
            Self::DuplicateLabel => "duplicate-label",
            Self::ExternalSidebarLink => "external-sidebar-link",
            Self::BrokenLink => "broken-link",
        }
    }
}

/// Position of a finding in the descriptor. Indices are zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Location {
    Nav { index: usize },
    SidebarGroup { group: usize },
    SidebarItem { group: usize, item: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nav { index } => write!(f, "theme.nav[{index}]"),
            Self::SidebarGroup { group } => write!(f, "theme.sidebar[{group}]"),
            Self::SidebarItem { group, item } => {
                write!(f, "theme.sidebar[{group}].items[{item}]")
            }
        }
    }
}

/// Single finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: Rule,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn error(rule: Rule, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            location,
            message: message.into(),
        }
    }

    pub(crate) fn warning(rule: Rule, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity,
            self.rule.code(),
            self.location,
            self.message
        )
    }
}

/// Ordered collection of findings from one check run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    #[must_use]
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether the run should be treated as failed.
    ///
    /// Errors always fail. Warnings fail only in strict mode.
    #[must_use]
    pub fn is_failure(&self, strict: bool) -> bool {
        self.error_count() > 0 || (strict && self.warning_count() > 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
