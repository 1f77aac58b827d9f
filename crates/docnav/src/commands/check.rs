//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::{Checker, Report};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to descriptor file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with markdown pages (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Treat warnings as failures.
    #[arg(long)]
    strict: bool,

    /// Skip checking that internal links have content pages.
    #[arg(long)]
    no_links: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor can't be loaded or the check fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            strict: self.strict.then_some(true),
            links: self.no_links.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Descriptor: {}", path.display())),
            None => output.info("Descriptor: none found, using defaults"),
        }
        if config.check.links {
            output.info(&format!(
                "Content directory: {}",
                config.content_resolved.dir.display()
            ));
        } else {
            output.info("Link check: disabled");
        }

        let report = Checker::new(&config).check();
        for diagnostic in report.diagnostics() {
            output.diagnostic(diagnostic);
        }

        let line = summary(&report);
        if report.is_failure(config.check.strict) {
            return Err(CliError::Validation(format!("Check failed: {line}")));
        }

        if report.is_empty() {
            output.success("Navigation OK");
        } else {
            output.warning(&format!("Navigation OK with {line}"));
        }
        Ok(())
    }
}

/// Count line such as `2 errors, 1 warning`.
fn summary(report: &Report) -> String {
    format!(
        "{}, {}",
        plural(report.error_count(), "error"),
        plural(report.warning_count(), "warning")
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
