//! Navigation descriptor loading for docnav.
//!
//! Parses `docnav.toml` (or `docnav.yaml` / `docnav.json`) with serde and
//! provides auto-discovery of descriptor files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.description`
//! - `site.out_dir`
//! - `site.base`
//! - `content.dir`
//!
//! Link hygiene (rooted paths, non-empty groups) is not checked here. Loading
//! only rejects descriptors that cannot be parsed or whose site metadata is
//! unusable; link quality is reported by `docnav-site`.

mod expand;
mod theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use theme::{NavEntry, SidebarGroup, SidebarLink, ThemeConfig};

/// CLI settings that override descriptor values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
    /// Override output directory.
    pub out_dir: Option<PathBuf>,
    /// Override base path.
    pub base: Option<String>,
    /// Override strict checking.
    pub strict: Option<bool>,
    /// Override link-integrity checking.
    pub links: Option<bool>,
}

/// Descriptor filenames searched for, in priority order.
const CONFIG_FILENAMES: [&str; 4] = ["docnav.toml", "docnav.yaml", "docnav.yml", "docnav.json"];

/// Descriptor file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Navigation descriptor.
///
/// Unknown sections and keys are rejected so that typos surface as parse
/// errors instead of silently dropping declarations.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Navigation bar and sidebar.
    pub theme: ThemeConfig,
    /// Checking behaviour.
    pub check: CheckConfig,
    /// Content location (paths are relative strings from the file).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub out_dir_resolved: PathBuf,
    /// Path to the descriptor file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Build output directory, relative to the descriptor.
    pub out_dir: String,
    /// URL path prefix the site is served under. Always ends with `/` after loading.
    pub base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            out_dir: "dist".to_owned(),
            base: "/".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from the file.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ContentConfigRaw {
    dir: Option<String>,
    exclude: Vec<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Directory holding the markdown pages.
    pub dir: PathBuf,
    /// Glob patterns (relative to `dir`) of files that are not pages.
    pub exclude: Vec<String>,
}

/// Checking behaviour.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Verify that internal links resolve to content pages.
    pub links: bool,
    /// Treat warnings as failures.
    pub strict: bool,
    /// Glob patterns of link paths exempt from link-integrity checks.
    pub ignore: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            links: true,
            strict: false,
            ignore: Vec::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Descriptor file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Extension is not one of toml, yaml, yml, json.
    #[error("Unsupported descriptor format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Descriptor field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_globs(patterns: &[String], field: &str) -> Result<(), ConfigError> {
    for pattern in patterns {
        glob::Pattern::new(pattern).map_err(|e| {
            ConfigError::Validation(format!("{field} has invalid pattern {pattern:?}: {e}"))
        })?;
    }
    Ok(())
}

/// Append a trailing slash to a base path if missing.
fn normalize_base(base: &str) -> String {
    if base.ends_with('/') {
        base.to_owned()
    } else {
        format!("{base}/")
    }
}

impl Config {
    /// Load a descriptor with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` (then `.yaml`, `.yml`, `.json`)
    /// in the current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse descriptor text, resolving paths against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn parse(content: &str, format: Format, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = match format {
            Format::Toml => toml::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };

        config.expand_env_vars()?;
        config.resolve_paths(config_dir);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.content_resolved.dir.clone_from(content_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.out_dir_resolved.clone_from(out_dir);
        }
        if let Some(base) = &settings.base {
            self.site.base = normalize_base(base);
        }
        if let Some(strict) = settings.strict {
            self.check.strict = strict;
        }
        if let Some(links) = settings.links {
            self.check.links = links;
        }
    }

    /// Search for a descriptor in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    /// Search `start` and its parents, trying each filename in priority order.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            if let Some(found) = CONFIG_FILENAMES
                .iter()
                .map(|name| current.join(name))
                .find(|candidate| candidate.exists())
            {
                return Some(found);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let site = SiteConfig::default();
        Self {
            out_dir_resolved: base.join(&site.out_dir),
            site,
            theme: ThemeConfig::default(),
            check: CheckConfig::default(),
            content: ContentConfigRaw::default(),
            content_resolved: ContentConfig {
                dir: base.join("docs"),
                exclude: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::parse(&content, format, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate site metadata and pattern lists.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        require_globs(&self.content_resolved.exclude, "content.exclude")?;
        require_globs(&self.check.ignore, "check.ignore")?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.out_dir, "site.out_dir")?;

        if !self.site.base.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base must start with '/', got {:?}",
                self.site.base
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in descriptor strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_in_place(&mut self.site.title, "site.title")?;
        expand::expand_in_place(&mut self.site.description, "site.description")?;
        expand::expand_in_place(&mut self.site.out_dir, "site.out_dir")?;
        expand::expand_in_place(&mut self.site.base, "site.base")?;

        if let Some(ref mut dir) = self.content.dir {
            expand::expand_in_place(dir, "content.dir")?;
        }

        Ok(())
    }

    /// Resolve relative paths against the descriptor directory and normalize the base.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            dir: config_dir.join(self.content.dir.as_deref().unwrap_or("docs")),
            exclude: self.content.exclude.clone(),
        };
        self.out_dir_resolved = config_dir.join(&self.site.out_dir);
        self.site.base = normalize_base(&self.site.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KONFIGO_TOML: &str = r#"
[site]
title = "Konfigo"
description = "Merge, validate and transform configuration files"
out_dir = "../dist"
base = "/konfigo"

[content]
dir = "pages"
exclude = ["drafts/**"]

[check]
ignore = ["/api/**"]

[[theme.nav]]
text = "Guide"
link = "/guide/"

[[theme.sidebar]]
text = "Getting Started"
items = [{ text = "Introduction", link = "/guide/" }]
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.content_resolved.dir, PathBuf::from("/test/docs"));
        assert_eq!(config.out_dir_resolved, PathBuf::from("/test/dist"));
        assert!(config.check.links);
        assert!(!config.check.strict);
        assert!(config.theme.nav.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("", Format::Toml, Path::new("/project")).unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.content_resolved.dir, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_parse_full_toml() {
        let config = Config::parse(KONFIGO_TOML, Format::Toml, Path::new("/project")).unwrap();
        assert_eq!(config.site.title, "Konfigo");
        assert_eq!(
            config.site.description,
            "Merge, validate and transform configuration files"
        );
        assert_eq!(config.site.base, "/konfigo/");
        assert_eq!(config.content_resolved.dir, PathBuf::from("/project/pages"));
        assert_eq!(config.content_resolved.exclude, vec!["drafts/**".to_owned()]);
        assert_eq!(config.out_dir_resolved, PathBuf::from("/project/../dist"));
        assert_eq!(config.check.ignore, vec!["/api/**".to_owned()]);
        assert_eq!(config.theme.nav.len(), 1);
        assert_eq!(config.theme.sidebar[0].items[0].link, "/guide/");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
site:
  title: Konfigo
  base: /docs/
theme:
  nav:
    - text: Guide
      link: /guide/
  sidebar:
    - text: Schema
      items:
        - text: Overview
          link: /schema/
"#;
        let config = Config::parse(yaml, Format::Yaml, Path::new("/project")).unwrap();
        assert_eq!(config.site.base, "/docs/");
        assert_eq!(config.theme.nav[0].text, "Guide");
        assert_eq!(config.theme.sidebar[0].items[0].link, "/schema/");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "site": { "title": "Konfigo", "base": "/" },
            "theme": {
                "nav": [{ "text": "GitHub", "link": "https://github.com/ebogdum/konfigo" }],
                "sidebar": []
            }
        }"#;
        let config = Config::parse(json, Format::Json, Path::new("/project")).unwrap();
        assert_eq!(config.theme.nav[0].link, "https://github.com/ebogdum/konfigo");
    }

    #[test]
    fn test_parse_error_is_toml_variant() {
        let err = Config::parse("[site", Format::Toml, Path::new("/p")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_parse_rejects_misspelled_theme_list() {
        let toml = r#"
[[theme.nav]]
text = "Guide"
link = "/guide/"

[[theme.sidbar]]
text = "Getting Started"
items = [{ text = "Introduction", link = "relative" }]
"#;
        let err = Config::parse(toml, Format::Toml, Path::new("/p")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("sidbar"));
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        let toml = r#"
[sit]
title = "Konfigo"
"#;
        let err = Config::parse(toml, Format::Toml, Path::new("/p")).unwrap_err();
        assert!(err.to_string().contains("`sit`"));

        let yaml = "site:\n  title: Konfigo\n  bse: /docs/\n";
        let err = Config::parse(yaml, Format::Yaml, Path::new("/p")).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().contains("bse"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("docnav.toml")).unwrap(),
            Format::Toml
        );
        assert_eq!(
            Format::from_path(Path::new("a/docnav.yml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            Format::from_path(Path::new("docnav.json")).unwrap(),
            Format::Json
        );
        assert!(matches!(
            Format::from_path(Path::new("docnav.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("docnav")).is_err());
    }

    #[test]
    fn test_base_gets_trailing_slash() {
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("/konfigo"), "/konfigo/");
        assert_eq!(normalize_base("/konfigo/"), "/konfigo/");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/docnav.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("docs").join("guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join("docnav.toml"), KONFIGO_TOML).unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join("docnav.toml"));
    }

    #[test]
    fn test_discover_from_prefers_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in ["docnav.json", "docnav.yml", "docnav.yaml", "docnav.toml"] {
            std::fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let found = Config::discover_from(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join("docnav.toml"));

        std::fs::remove_file(temp_dir.path().join("docnav.toml")).unwrap();
        let found = Config::discover_from(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join("docnav.yaml"));
    }

    #[test]
    fn test_discover_from_nearest_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("site");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(temp_dir.path().join("docnav.toml"), "").unwrap();
        std::fs::write(nested.join("docnav.json"), "{}").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, nested.join("docnav.json"));
    }

    #[test]
    fn test_discover_from_nothing_in_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        // The walk continues above the temp dir, so only assert nothing inside it matched
        let found = Config::discover_from(&nested);
        assert!(found.is_none_or(|path| !path.starts_with(temp_dir.path())));
    }

    #[test]
    fn test_load_from_file_sets_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, KONFIGO_TOML).unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.content_resolved.dir, temp_dir.path().join("pages"));
    }

    #[test]
    fn test_apply_cli_settings_content_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            content_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.content_resolved.dir, PathBuf::from("/custom/docs"));
        assert_eq!(config.out_dir_resolved, PathBuf::from("/test/dist")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_normalized() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base: Some("/preview".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.base, "/preview/");
    }

    #[test]
    fn test_apply_cli_settings_check_flags() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            strict: Some(true),
            links: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.check.strict);
        assert!(!config.check.links);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.base, before.site.base);
        assert_eq!(config.check.links, before.check.links);
        assert_eq!(config.content_resolved.dir, before.content_resolved.dir);
    }

    #[test]
    fn test_expand_env_vars_site() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_CFG_BASE", "/pr-42/");
        }

        let toml = r#"
[site]
title = "Konfigo"
base = "${DOCNAV_CFG_BASE}"
out_dir = "${DOCNAV_CFG_OUT:-dist}"
"#;
        let config = Config::parse(toml, Format::Toml, Path::new("/p")).unwrap();

        assert_eq!(config.site.base, "/pr-42/");
        assert_eq!(config.site.out_dir, "dist");

        unsafe {
            std::env::remove_var("DOCNAV_CFG_BASE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_CFG_MISSING");
        }

        let toml = r#"
[content]
dir = "${DOCNAV_CFG_MISSING}"
"#;
        let err = Config::parse(toml, Format::Toml, Path::new("/p")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("content.dir"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_out_dir_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.out_dir = String::new();
        assert_validation_error(&config, &["site.out_dir"]);
    }

    #[test]
    fn test_validate_relative_base() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base = "docs/".to_owned();
        assert_validation_error(&config, &["site.base", "'/'"]);
    }

    #[test]
    fn test_validate_bad_ignore_glob() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.check.ignore = vec!["/api/[".to_owned()];
        assert_validation_error(&config, &["check.ignore", "/api/["]);
    }

    #[test]
    fn test_validate_bad_exclude_glob() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.content_resolved.exclude = vec!["***".to_owned()];
        assert_validation_error(&config, &["content.exclude"]);
    }

    #[test]
    fn test_link_hygiene_not_validated_on_load() {
        let toml = r#"
[[theme.nav]]
text = ""
link = "guide"

[[theme.sidebar]]
text = "Empty"
"#;
        let config = Config::parse(toml, Format::Toml, Path::new("/p")).unwrap();
        assert_eq!(config.theme.nav[0].link, "guide");
        assert!(config.theme.sidebar[0].items.is_empty());
    }
}
