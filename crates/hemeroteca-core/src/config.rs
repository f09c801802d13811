//! Configuration management

use crate::error::{HemerotecaError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,

    /// Characters of context kept before and after each occurrence
    #[serde(default = "default_preview_radius")]
    pub preview_radius: usize,

    /// Special characters preserved in search terms (also FTS tokenchars)
    #[serde(default)]
    pub accepted_special_characters: String,

    /// Minimum search term length in characters
    #[serde(default = "default_min_term_chars")]
    pub min_term_chars: usize,

    /// Maximum search term length in characters
    #[serde(default = "default_max_term_chars")]
    pub max_term_chars: usize,

    /// Database file path (falls back to the per-user data directory)
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_results_per_page() -> usize {
    10
}

fn default_preview_radius() -> usize {
    200
}

fn default_min_term_chars() -> usize {
    4
}

fn default_max_term_chars() -> usize {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
            preview_radius: default_preview_radius(),
            accepted_special_characters: String::new(),
            min_term_chars: default_min_term_chars(),
            max_term_chars: default_max_term_chars(),
            database_path: None,
        }
    }
}

impl Config {
    /// Load config from the default path, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific YAML file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::DATA_DIR_NAME)
            .join("config.yaml")
    }

    /// Resolve the database path: explicit config value or per-user default
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(crate::db::Database::default_path)
    }

    fn validate(&self) -> Result<()> {
        if self.results_per_page == 0 {
            return Err(HemerotecaError::Config(
                "results_per_page must be at least 1".to_string(),
            ));
        }
        if self.min_term_chars == 0 || self.min_term_chars > self.max_term_chars {
            return Err(HemerotecaError::Config(format!(
                "invalid term length bounds: {}..{}",
                self.min_term_chars, self.max_term_chars
            )));
        }
        Ok(())
    }

    /// Check a formatted search term against the configured length bounds
    pub fn check_term_length(&self, term: &str) -> Result<()> {
        let chars = term.chars().count();
        if chars < self.min_term_chars {
            return Err(HemerotecaError::InvalidTerm(format!(
                "term must be at least {} characters, got {}",
                self.min_term_chars, chars
            )));
        }
        if chars > self.max_term_chars {
            return Err(HemerotecaError::InvalidTerm(format!(
                "term must be at most {} characters, got {}",
                self.max_term_chars, chars
            )));
        }
        Ok(())
    }
}
