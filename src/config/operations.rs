//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{AppError, Result};
use crate::prompt::{Tips, render_api_info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the explicitly given config, or `aiprompt.yaml` in `dir` if it
    /// exists, or defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| AppError::ConfigError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AppError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `apis` entries need a non-empty, unique `name`
    /// - `python_version` and `locale`, when set, must be non-empty
    /// - `tips_file`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for api in &self.apis {
            if api.name.trim().is_empty() {
                return Err(AppError::ConfigError(
                    "config validation failed: apis entries must have a non-empty name"
                        .to_string(),
                ));
            }
            if !names.insert(api.name.as_str()) {
                return Err(AppError::ConfigError(format!(
                    "config validation failed: duplicate api name '{}'",
                    api.name
                )));
            }
        }

        for (field, value) in [
            ("python_version", &self.python_version),
            ("locale", &self.locale),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(AppError::ConfigError(format!(
                    "config validation failed: {} must not be empty when set",
                    field
                )));
            }
        }

        if self
            .tips_file
            .as_deref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(AppError::ConfigError(
                "config validation failed: tips_file must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }

    /// The `{apis}` text: raw `api_info` if set, else the rendered `apis`.
    pub fn api_info(&self) -> String {
        match &self.api_info {
            Some(raw) => raw.clone(),
            None => render_api_info(&self.apis),
        }
    }

    /// `tips_file` resolved against the config file's directory.
    pub fn tips_path(&self) -> Option<PathBuf> {
        let tips_file = self.tips_file.as_ref()?;
        match &self.base_dir {
            Some(base) if tips_file.is_relative() => Some(base.join(tips_file)),
            _ => Some(tips_file.clone()),
        }
    }

    /// Load the configured tips file, or empty tips when none is configured.
    pub fn load_tips(&self) -> Result<Tips> {
        match self.tips_path() {
            Some(path) => Tips::load(path),
            None => Ok(Tips::default()),
        }
    }
}
