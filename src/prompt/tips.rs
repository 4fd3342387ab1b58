//! Role and tips model for the system prompt.
//!
//! A tips file names the agent's default role and lists best-practice tips:
//!
//! ```yaml
//! role:
//!   name: aipy
//!   short: Python coding agent
//!   detail: |
//!     You are an expert Python programmer...
//! tips:
//!   - name: plotting
//!     short: Chart conventions
//!     detail: Always label both axes.
//! ```
//!
//! Unknown fields are ignored.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// A single role description or best-practice entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(default)]
    pub detail: String,
}

impl Tip {
    pub fn new(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            detail: detail.into(),
        }
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<tip name=\"{}\">\n{}\n</tip>", self.name, self.detail.trim_end())
    }
}

/// The role plus the ordered tips collection.
///
/// `len()` counts tips only; the role is not a tip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tips {
    pub role: Option<Tip>,
    pub tips: Vec<Tip>,
}

impl Tips {
    pub fn new(role: Tip) -> Self {
        Self {
            role: Some(role),
            tips: Vec::new(),
        }
    }

    pub fn with_tip(mut self, tip: Tip) -> Self {
        self.tips.push(tip);
        self
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn role(&self) -> Option<&Tip> {
        self.role.as_ref()
    }

    /// Look up a tip by name.
    pub fn get(&self, name: &str) -> Option<&Tip> {
        self.tips.iter().find(|t| t.name == name)
    }

    /// Load a tips file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to read tips file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse tips YAML and check that tip names are present and unique.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let tips: Tips = serde_yaml::from_str(yaml)
            .map_err(|e| AppError::ConfigError(format!("failed to parse tips YAML: {}", e)))?;

        tips.validate()?;
        Ok(tips)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tip in &self.tips {
            if tip.name.trim().is_empty() {
                return Err(AppError::ConfigError(
                    "tips validation failed: every tip needs a non-empty name".to_string(),
                ));
            }
            if !seen.insert(tip.name.as_str()) {
                return Err(AppError::ConfigError(format!(
                    "tips validation failed: duplicate tip name '{}'",
                    tip.name
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Tips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tips.is_empty() {
            return Ok(());
        }

        writeln!(f, "<tips>")?;
        for tip in &self.tips {
            writeln!(f, "{}", tip)?;
        }
        write!(f, "</tips>")
    }
}
