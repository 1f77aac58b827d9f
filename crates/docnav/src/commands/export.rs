//! `docnav export` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use docnav_config::{CliSettings, Config};
use docnav_site::{ExportFormat, SiteNavigation};

use crate::error::CliError;
use crate::output::Output;

/// Output format accepted on the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum FormatArg {
    #[default]
    Json,
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Yaml => Self::Yaml,
        }
    }
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to descriptor file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: FormatArg,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base path to serve the site under (overrides config).
    #[arg(long, env = "DOCNAV_BASE")]
    base: Option<String>,

    /// Build output directory recorded in the export (overrides config).
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, serialization or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base: self.base,
            out_dir: self.out_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let navigation = SiteNavigation::build(&config);
        let mut rendered = navigation.render(self.format.into())?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        match self.output {
            Some(path) => {
                write_output(&path, &rendered)?;
                Output::new().success(&format!("Navigation written to {}", path.display()));
            }
            None => {
                std::io::stdout().lock().write_all(rendered.as_bytes())?;
            }
        }

        tracing::debug!(
            nav = navigation.nav.len(),
            groups = navigation.sidebar.len(),
            "Navigation exported"
        );
        Ok(())
    }
}

/// Write rendered navigation to `path`, creating missing parent directories.
fn write_output(path: &Path, rendered: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, rendered)?;
    Ok(())
}
