//! `docnav tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;
use docnav_site::{NavItem, SiteNavigation};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Path to descriptor file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor can't be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let navigation = SiteNavigation::build(&config);

        output.highlight(&format!("{} ({})", navigation.title, navigation.base));
        if !navigation.description.is_empty() {
            output.muted(&navigation.description);
        }

        output.info("");
        output.highlight("Navigation");
        for item in &navigation.nav {
            output.info(&item_line(item, 1));
        }

        output.info("");
        output.highlight("Sidebar");
        for group in &navigation.sidebar {
            output.info(&item_line(group, 1));
            for item in &group.children {
                output.info(&item_line(item, 2));
            }
        }

        Ok(())
    }
}

/// Indented `title -> path` line; groups (no path) show the title only.
fn item_line(item: &NavItem, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    if item.path.is_empty() {
        format!("{indent}{}", item.title)
    } else if item.external {
        format!("{indent}{} -> {} (external)", item.title, item.path)
    } else {
        format!("{indent}{} -> {}", item.title, item.path)
    }
}
