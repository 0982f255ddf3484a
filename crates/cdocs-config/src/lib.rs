//! Configuration management for cdocs.
//!
//! Parses `catalog.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [docs]
//! project_dir = "${CATALOG_DIR:-.}"
//! patterns = ["*.mdx"]
//!
//! [content]
//! index = "catalog-index.json"
//!
//! [[sidebar]]
//! label = "Guides"
//! autogenerated = { directory = "guides" }
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Path values support `${VAR}` and `${VAR:-default}`. Expanded fields:
//! - `docs.project_dir`
//! - `docs.site_dir`
//! - `content.index`

mod expand;
mod sidebar;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

pub use sidebar::{AutogeneratedDir, Badge, SidebarConfigItem};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "catalog.toml";

/// Environment variable supplying the project directory when the config
/// file doesn't set one.
pub const PROJECT_DIR_ENV: &str = "PROJECT_DIR";

/// Default file patterns for auto-generated sidebar directories.
const DEFAULT_PATTERNS: [&str; 2] = ["*.md", "*.mdx"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the project directory.
    pub project_dir: Option<PathBuf>,
    /// Override the content index snapshot path.
    pub index_path: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are raw strings from TOML).
    docs: DocsConfigRaw,
    /// Content index configuration (paths are raw strings from TOML).
    content: ContentConfigRaw,
    /// Sidebar configuration tree.
    pub sidebar: Vec<SidebarConfigItem>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."), None)
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    project_dir: Option<String>,
    site_dir: Option<String>,
    patterns: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Catalog project directory (contains `docs/`, `domains/`, ...).
    pub project_dir: PathBuf,
    /// Site directory generated output paths are derived from.
    pub site_dir: PathBuf,
    /// File patterns listed in auto-generated sidebar directories.
    pub patterns: Vec<String>,
}

impl DocsConfig {
    /// Documentation root (`<project_dir>/docs`).
    #[must_use]
    pub fn docs_dir(&self) -> PathBuf {
        self.project_dir.join("docs")
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    index: Option<String>,
}

/// Resolved content index configuration.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Path to the JSON content index snapshot.
    pub index_path: Option<PathBuf>,
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
        /// Config field path (e.g., "`docs.project_dir`").
        field: String,
        /// Error message (e.g., "${`CATALOG_DIR`} not set").
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

/// Require a directory to be relative and stay inside its root.
fn require_relative_dir(dir: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(dir, field)?;
    let escapes = Path::new(dir)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::Validation(format!(
            "{field} must be a relative path inside the docs directory, got {dir:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `catalog.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// validation fails.
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
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative paths are resolved against `base_dir`. `PROJECT_DIR` is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base_dir, None);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(project_dir) = &settings.project_dir {
            self.docs_resolved.project_dir.clone_from(project_dir);
        }
        if let Some(index_path) = &settings.index_path {
            self.content_resolved.index_path = Some(index_path.clone());
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

    /// `PROJECT_DIR` from the environment, if set and non-empty.
    fn project_dir_from_env() -> Option<PathBuf> {
        std::env::var_os(PROJECT_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd, Self::project_dir_from_env().as_deref())
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path, env_project_dir: Option<&Path>) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            content: ContentConfigRaw::default(),
            sidebar: Vec::new(),
            docs_resolved: DocsConfig {
                project_dir: env_project_dir.map_or_else(|| base.to_path_buf(), Path::to_path_buf),
                site_dir: base.to_path_buf(),
                patterns: DEFAULT_PATTERNS.map(str::to_owned).to_vec(),
            },
            content_resolved: ContentConfig::default(),
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
        config.resolve_paths(config_dir, Self::project_dir_from_env().as_deref());
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            config = %path.display(),
            project_dir = %config.docs_resolved.project_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.docs_resolved.patterns {
            require_non_empty(pattern, "docs.patterns")?;
        }
        Self::validate_sidebar(&self.sidebar, "sidebar")
    }

    /// Validate sidebar items recursively.
    fn validate_sidebar(items: &[SidebarConfigItem], path: &str) -> Result<(), ConfigError> {
        for (i, item) in items.iter().enumerate() {
            let field = format!("{path}[{i}]");
            require_non_empty(item.label(), &format!("{field}.label"))?;

            match item {
                SidebarConfigItem::Autogenerated { autogenerated, .. } => {
                    require_relative_dir(
                        &autogenerated.directory,
                        &format!("{field}.autogenerated.directory"),
                    )?;
                }
                SidebarConfigItem::Group { items, .. } => {
                    if items.is_empty() {
                        tracing::warn!(item = %field, "Sidebar group has no items");
                    }
                    Self::validate_sidebar(items, &format!("{field}.items"))?;
                }
                SidebarConfigItem::Link { slug: None, .. } => {
                    tracing::warn!(item = %field, "Sidebar link has no slug");
                }
                SidebarConfigItem::Link { .. } => {}
            }
        }
        Ok(())
    }

    /// Expand environment variable references in path values.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_optional(&mut self.docs.project_dir, "docs.project_dir")?;
        expand::expand_optional(&mut self.docs.site_dir, "docs.site_dir")?;
        expand::expand_optional(&mut self.content.index, "content.index")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// The project directory comes from `docs.project_dir`, then
    /// `env_project_dir`, then the config directory.
    fn resolve_paths(&mut self, config_dir: &Path, env_project_dir: Option<&Path>) {
        let project_dir = match (&self.docs.project_dir, env_project_dir) {
            (Some(dir), _) => config_dir.join(dir),
            (None, Some(env)) => env.to_path_buf(),
            (None, None) => config_dir.to_path_buf(),
        };

        self.docs_resolved = DocsConfig {
            project_dir,
            site_dir: self
                .docs
                .site_dir
                .as_deref()
                .map_or_else(|| config_dir.to_path_buf(), |d| config_dir.join(d)),
            patterns: self
                .docs
                .patterns
                .clone()
                .unwrap_or_else(|| DEFAULT_PATTERNS.map(str::to_owned).to_vec()),
        };

        self.content_resolved = ContentConfig {
            index_path: self.content.index.as_deref().map(|p| config_dir.join(p)),
        };
    }
}
