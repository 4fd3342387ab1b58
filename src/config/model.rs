//! Config struct definition.

use crate::prompt::ApiSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "aiprompt.yaml";

/// Configuration for prompt assembly.
///
/// This struct represents the contents of `aiprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // System prompt
    // =========================================================================
    /// Tips YAML (role + best practices). Relative paths resolve against the
    /// directory of the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips_file: Option<PathBuf>,

    /// Role prompt that replaces the tips role and suppresses the tips section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,

    /// Raw API description text. Takes priority over `apis`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_info: Option<String>,

    /// Structured API descriptions, rendered when `api_info` is not set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<ApiSpec>,

    // =========================================================================
    // Task context
    // =========================================================================
    /// Whether the agent runs behind a GUI rather than a terminal.
    pub gui: bool,

    /// Python version of the execution runtime, reported in task context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,

    /// Overrides the locale detected from `LC_ALL` / `LC_CTYPE` / `LANG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Directory of the loaded config file, for resolving `tips_file`.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}
