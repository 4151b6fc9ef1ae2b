use super::SnippetConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing catalogue configuration, persisted as iconbook.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sprite: SpriteConfig,
    #[serde(default)]
    pub snippets: SnippetConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("iconbook.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.sprite.source.trim().is_empty() {
            errors.push("sprite.source must not be empty".to_string());
        }

        if self.search.suggestion_limit == 0 {
            errors.push("search.suggestion_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            general: self.general.clone(),
            sprite: SpriteConfig {
                source: if self.sprite.source.trim().is_empty() {
                    defaults.sprite.source
                } else {
                    self.sprite.source.clone()
                },
            },
            snippets: self.snippets.clone(),
            search: SearchSettings {
                suggestion_limit: if self.search.suggestion_limit == 0 {
                    defaults.search.suggestion_limit
                } else {
                    self.search.suggestion_limit
                },
                ..self.search.clone()
            },
        }
    }
}

/// General page settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Base path the catalogue page is served under. Informational only:
    /// kept with the rest of the deployment settings, never used to resolve
    /// `sprite.source`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

/// Location of the sprite document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// URL (`http://`, `https://`) or file path.
    #[serde(default = "default_sprite_source")]
    pub source: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            source: default_sprite_source(),
        }
    }
}

/// Case handling for name suggestions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

/// Search settings. They only affect "did you mean" suggestions; the icon
/// filter is always case-insensitive substring matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}

fn default_base_path() -> String {
    "/icon-preview/".to_string()
}

fn default_sprite_source() -> String {
    "is-icon-defs.svg".to_string()
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
