//! Configuration management for sidebar tooling.
//!
//! Parses `sidebar.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `docs.sidebars`
//! - `site.stylesheets`
//! - `site.analytics_id`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebars definition file.
    pub sidebars: Option<PathBuf>,
    /// Override whether unresolved references fail the check.
    pub fail_on_missing: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidebar.toml";

/// Sidebars file extensions the loader understands.
const SIDEBARS_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Default advisory nesting limit.
const DEFAULT_MAX_DEPTH: usize = 4;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Validation behaviour.
    pub validation: ValidationConfig,
    /// Page shell settings.
    pub site: SiteConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebars: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Sidebars definition file (JSON or YAML).
    pub sidebars: PathBuf,
}

/// Validation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether unresolved document references fail the check.
    pub fail_on_missing: bool,
    /// Nesting depth beyond which a warning is reported.
    pub max_depth: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_on_missing: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Settings for the page shell wrapping every rendered page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Global stylesheets, imported once in declaration order.
    pub stylesheets: Vec<String>,
    /// Extra languages registered with the syntax highlighter.
    pub highlight_languages: Vec<String>,
    /// Tag manager container id. Empty or missing disables analytics.
    pub analytics_id: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stylesheets: vec!["styles/global.css".to_owned()],
            highlight_languages: ["kotlin", "csharp", "solidity", "shell-session", "swift"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            analytics_id: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.analytics_id`").
        field: String,
        /// Error message (e.g., "${`GTM_ID`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Check a tag manager container id (`GTM-XXXX`) or measurement id (`G-XXXX`).
fn is_analytics_id(id: &str) -> bool {
    let suffix = id.strip_prefix("GTM-").or_else(|| id.strip_prefix("G-"));
    suffix.is_some_and(|s| {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    })
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidebar.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
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

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebars) = &settings.sidebars {
            self.docs_resolved.sidebars.clone_from(sidebars);
        }
        if let Some(fail_on_missing) = settings.fail_on_missing {
            self.validation.fail_on_missing = fail_on_missing;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
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
        Self {
            docs: DocsConfigRaw::default(),
            validation: ValidationConfig::default(),
            site: SiteConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebars: base.join("sidebars.json"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and again after CLI
    /// settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_docs()?;
        self.validate_validation()?;
        self.validate_site()?;
        Ok(())
    }

    /// Validate docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        let sidebars = &self.docs_resolved.sidebars;
        let supported = sidebars
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                SIDEBARS_EXTENSIONS
                    .iter()
                    .any(|s| ext.eq_ignore_ascii_case(s))
            });
        if !supported {
            return Err(ConfigError::Validation(format!(
                "docs.sidebars must be a .json, .yaml or .yml file, got {}",
                sidebars.display()
            )));
        }
        Ok(())
    }

    /// Validate validation configuration.
    fn validate_validation(&self) -> Result<(), ConfigError> {
        if self.validation.max_depth == 0 {
            return Err(ConfigError::Validation(
                "validation.max_depth must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        for stylesheet in &self.site.stylesheets {
            require_non_empty(stylesheet, "site.stylesheets")?;
        }
        for language in &self.site.highlight_languages {
            require_non_empty(language, "site.highlight_languages")?;
        }
        if let Some(id) = &self.site.analytics_id
            && !is_analytics_id(id)
        {
            return Err(ConfigError::Validation(format!(
                "site.analytics_id must look like GTM-XXXX or G-XXXX, got {id:?}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    ///
    /// An analytics id that expands to an empty string is treated as unset.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.docs.source_dir, "docs.source_dir")?;
        expand::expand_opt(&mut self.docs.sidebars, "docs.sidebars")?;

        for stylesheet in &mut self.site.stylesheets {
            *stylesheet = expand::expand_env(stylesheet, "site.stylesheets")?;
        }

        expand::expand_opt(&mut self.site.analytics_id, "site.analytics_id")?;
        if self.site.analytics_id.as_deref().is_some_and(str::is_empty) {
            self.site.analytics_id = None;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebars: resolve(self.docs.sidebars.as_deref(), "sidebars.json"),
        };
    }
}
