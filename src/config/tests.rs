//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::AppError;
use crate::prompt::ApiSpec;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.tips_file.is_none());
    assert!(config.user_prompt.is_none());
    assert!(config.api_info.is_none());
    assert!(config.apis.is_empty());
    assert!(!config.gui);
    assert!(config.python_version.is_none());
    assert!(config.locale.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
tips_file: roles/aipy.yaml
user_prompt: You are a data analyst.
gui: true
python_version: "3.12.4"
locale: zh_CN.UTF-8
apis:
  - name: Weather
    desc: Current weather by city.
    env:
      WEATHER_API_KEY: access key
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.tips_file, Some(PathBuf::from("roles/aipy.yaml")));
    assert_eq!(config.user_prompt.as_deref(), Some("You are a data analyst."));
    assert!(config.gui);
    assert_eq!(config.python_version.as_deref(), Some("3.12.4"));
    assert_eq!(config.locale.as_deref(), Some("zh_CN.UTF-8"));
    assert_eq!(
        config.apis,
        vec![ApiSpec::new("Weather", "Current weather by city.").with_env("WEATHER_API_KEY", "access key")]
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
gui: true
some_future_setting: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.gui);
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("gui: [not a bool").unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_duplicate_api_names() {
    let yaml = r#"
apis:
  - name: Weather
  - name: Weather
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate api name 'Weather'"));
}

#[test]
fn test_validate_rejects_blank_api_name() {
    let err = Config::from_yaml("apis:\n  - name: ''\n").unwrap_err();
    assert!(err.to_string().contains("non-empty name"));
}

#[test]
fn test_validate_rejects_empty_overrides() {
    let err = Config::from_yaml("python_version: ''\n").unwrap_err();
    assert!(err.to_string().contains("python_version must not be empty"));

    let err = Config::from_yaml("locale: '  '\n").unwrap_err();
    assert!(err.to_string().contains("locale must not be empty"));

    let err = Config::from_yaml("tips_file: ''\n").unwrap_err();
    assert!(err.to_string().contains("tips_file must not be empty"));
}

#[test]
fn test_yaml_roundtrip_keeps_settings() {
    let config = Config {
        user_prompt: Some("Be terse.".to_string()),
        gui: true,
        apis: vec![ApiSpec::new("Echo", "Returns its input.")],
        ..Default::default()
    };

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("user_prompt: Be terse."));
    assert!(!yaml.contains("base_dir"));

    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_api_info_prefers_raw_text() {
    let config = Config {
        api_info: Some("raw api text".to_string()),
        apis: vec![ApiSpec::new("Echo", "ignored")],
        ..Default::default()
    };
    assert_eq!(config.api_info(), "raw api text");
}

#[test]
fn test_api_info_renders_apis() {
    let config = Config {
        apis: vec![ApiSpec::new("Echo", "Returns its input.")],
        ..Default::default()
    };
    assert_eq!(config.api_info(), "## Echo API\n### API 描述\nReturns its input.");
    assert_eq!(Config::default().api_info(), "");
}

#[test]
fn test_load_sets_base_dir_and_resolves_tips() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("roles")).unwrap();
    std::fs::write(
        dir.path().join("roles").join("aipy.yaml"),
        "role:\n  name: aipy\n  detail: You write Python.\ntips:\n  - name: a\n    detail: b\n",
    )
    .unwrap();
    let config_path = dir.path().join("custom.yaml");
    std::fs::write(&config_path, "tips_file: roles/aipy.yaml\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    assert_eq!(
        config.tips_path(),
        Some(dir.path().join("roles").join("aipy.yaml"))
    );

    let tips = config.load_tips().unwrap();
    assert_eq!(tips.role().unwrap().detail, "You write Python.");
    assert_eq!(tips.len(), 1);
}

#[test]
fn test_absolute_tips_path_is_kept() {
    let config = Config {
        tips_file: Some(PathBuf::from("/etc/aiprompt/tips.yaml")),
        base_dir: Some(PathBuf::from("/home/user")),
        ..Default::default()
    };
    assert_eq!(
        config.tips_path(),
        Some(PathBuf::from("/etc/aiprompt/tips.yaml"))
    );
}

#[test]
fn test_load_tips_without_file_is_empty() {
    let tips = Config::default().load_tips().unwrap();
    assert!(tips.is_empty());
    assert!(tips.role().is_none());
}

#[test]
fn test_load_missing_file() {
    let err = Config::load(Path::new("/nonexistent/aiprompt.yaml")).unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "gui: false\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "gui: true\n").unwrap();

    let config = Config::resolve(Some(&explicit), dir.path()).unwrap();
    assert!(config.gui);
}

#[test]
fn test_resolve_uses_default_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "gui: true\n").unwrap();

    let config = Config::resolve(None, dir.path()).unwrap();
    assert!(config.gui);
    assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::resolve(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_missing_explicit_path_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(Config::resolve(Some(&missing), dir.path()).is_err());
}
