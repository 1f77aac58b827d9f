//! Navigation checking and export for docnav.
//!
//! This crate provides:
//! - [`lint`]: authoring-hygiene rules over the navigation tree
//! - [`ContentIndex`] and [`check_links`]: link integrity against a content directory
//! - [`Checker`]: both of the above driven by a loaded [`Config`](docnav_config::Config)
//! - [`SiteNavigation`]: the resolved tree handed to the site renderer
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::Config;
//! use docnav_site::{Checker, ExportFormat, SiteNavigation};
//!
//! let config = Config::load(None, None)?;
//!
//! let report = Checker::new(&config).check();
//! for diagnostic in report.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//!
//! let json = SiteNavigation::build(&config).render(ExportFormat::Json)?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod content;
mod diagnostic;
mod link;
mod links;
mod lint;
mod navigation;

pub use checker::Checker;
pub use content::ContentIndex;
pub use diagnostic::{Diagnostic, Location, Report, Rule, Severity};
pub use link::{LinkKind, classify, page_key, with_base};
pub use links::check_links;
pub use lint::lint;
pub use navigation::{ExportError, ExportFormat, NavItem, SiteNavigation};
