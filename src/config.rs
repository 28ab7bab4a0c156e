/// Configuration system for til-index
///
/// Supports loading from multiple sources with priority:
/// CLI args > Environment variables > Config file > Defaults
use crate::error::{ConfigError, TilError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up at the root of the notes repository
pub const CONFIG_FILE_NAME: &str = "til-index.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target document configuration
    #[serde(default)]
    pub readme: ReadmeConfig,

    /// Note discovery configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Webhook notification configuration
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Target document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    /// File name of the root document, relative to the repository root.
    /// Notes with this file name are never indexed.
    #[serde(default = "default_readme_file_name")]
    pub file_name: String,

    /// Branch or commit the change history is read from
    #[serde(default = "default_branch")]
    pub branch: String,
}

/// Note discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndexConfig {
    /// Glob patterns (relative to the root) of notes to leave out of the index
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Webhook notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Incoming webhook URL the card is posted to
    #[serde(default)]
    pub webhook_url: String,

    /// Web URL of the repository, e.g. https://github.com/owner/repo
    #[serde(default)]
    pub repo_url: String,

    /// Branch used when linking to notes on the repository host
    #[serde(default = "default_branch")]
    pub blob_branch: String,

    /// Number of characters read after the title line for the excerpt
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    /// Maximum width of the shortened excerpt, placeholder included
    #[serde(default = "default_excerpt_width")]
    pub excerpt_width: usize,

    /// Timeout in seconds for the webhook request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_readme_file_name() -> String {
    "README.md".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_excerpt_chars() -> usize {
    200
}

fn default_excerpt_width() -> usize {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            file_name: default_readme_file_name(),
            branch: default_branch(),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            repo_url: String::new(),
            blob_branch: default_branch(),
            excerpt_chars: default_excerpt_chars(),
            excerpt_width: default_excerpt_width(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, TilError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Path of the config file for a notes repository
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the repository root or fall back to defaults
    pub fn load_or_default(root: &Path) -> Result<Self, TilError> {
        let config_path = Self::default_path(root);

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), TilError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), TilError> {
        if self.readme.file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "readme.file_name".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.readme.file_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                key: "readme.file_name".to_string(),
                reason: format!(
                    "must be a file name without directories, got '{}'",
                    self.readme.file_name
                ),
            }
            .into());
        }

        if self.readme.branch.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "readme.branch".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.notify.excerpt_chars == 0 {
            return Err(ConfigError::InvalidValue {
                key: "notify.excerpt_chars".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        // Room for at least one character plus the "..." placeholder
        if self.notify.excerpt_width < 4 {
            return Err(ConfigError::InvalidValue {
                key: "notify.excerpt_width".to_string(),
                reason: format!("must be at least 4, got {}", self.notify.excerpt_width),
            }
            .into());
        }

        if self.notify.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "notify.timeout_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// `TIL_*` variables take precedence over the CI variables they shadow.
    pub fn apply_overrides_from(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(name) = var("TIL_README") {
            self.readme.file_name = name;
        }

        if let Some(branch) = var("TIL_BRANCH") {
            self.readme.branch = branch;
        }

        if let Some(url) = var("TIL_WEBHOOK_URL").or_else(|| var("TEAMS_WEBHOOK_URL")) {
            self.notify.webhook_url = url;
        }

        let ci_repo_url = || -> Option<String> {
            let server = var("GITHUB_SERVER_URL")?;
            let repository = var("GITHUB_REPOSITORY")?;
            Some(format!("{}/{}", server.trim_end_matches('/'), repository))
        };
        if let Some(url) = var("TIL_REPO_URL").or_else(ci_repo_url) {
            self.notify.repo_url = url;
        }

        if let Some(width) = var("TIL_EXCERPT_WIDTH")
            && let Ok(width) = width.parse()
        {
            self.notify.excerpt_width = width;
        }
    }

    /// Load the config for a repository, explicitly or from its root, then apply
    /// environment overrides and validate the result.
    pub fn new(root: &Path, explicit: Option<&Path>) -> Result<Self, TilError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => Self::load_or_default(root)?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}
