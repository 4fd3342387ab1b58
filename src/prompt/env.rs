//! Environment access and the host snapshot used in task prompts.
//!
//! Builders never call `std::env` or the clock directly. They take an
//! [`Environment`] for variable lookups and a [`HostInfo`] captured once by
//! [`HostInfo::detect`].

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Placeholder used when a value cannot be determined.
pub const UNKNOWN: &str = "unknown";

/// Read-only access to environment variables.
pub trait Environment {
    /// Value of `name`, or `None` when unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name`, or [`UNKNOWN`] when unset.
    fn var_or_unknown(&self, name: &str) -> String {
        self.var(name).unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Facts about the machine the generated code runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// `Linux`, `Darwin`, `Windows`, ...
    pub os_type: String,
    pub os_locale: String,
    /// `{os_type}-{arch}`, e.g. `Linux-x86_64`.
    pub os_platform: String,
    pub python_version: String,
    pub today: NaiveDate,
}

impl HostInfo {
    /// Snapshot the current host.
    ///
    /// The locale comes from `LC_ALL`, `LC_CTYPE` or `LANG` (first non-empty).
    /// `python_version` is whatever the caller knows about the execution
    /// runtime; `None` becomes [`UNKNOWN`].
    pub fn detect(env: &impl Environment, python_version: Option<&str>) -> Self {
        let os_type = os_type_name(std::env::consts::OS);
        let os_platform = format!("{}-{}", os_type, std::env::consts::ARCH);

        Self {
            os_locale: locale_from_env(env),
            os_platform,
            os_type,
            python_version: python_version
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string(),
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.os_locale = locale.into();
        self
    }
}

/// Map a Rust target OS name to the name a Python runtime reports.
fn os_type_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => UNKNOWN.to_string(),
            }
        }
    }
}

fn locale_from_env(env: &impl Environment) -> String {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|name| env.var(name))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
