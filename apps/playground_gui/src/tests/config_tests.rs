use super::*;

use std::{
    collections::HashMap,
    env, fs,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = env::temp_dir().join(format!("transformer_playground_test_{suffix}_{n}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn normalizes_trailing_slashes() {
    assert_eq!(
        normalize_base_url(" http://127.0.0.1:8000/ ").expect("valid"),
        "http://127.0.0.1:8000"
    );
    assert_eq!(
        normalize_base_url("https://host.example/prefix//").expect("valid"),
        "https://host.example/prefix"
    );
}

#[test]
fn rejects_non_http_base_urls() {
    assert!(matches!(
        normalize_base_url("ftp://host.example"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(normalize_base_url("not a url").is_err());
    assert!(normalize_base_url("http://host.example/?x=1").is_err());
}

#[test]
fn explicit_config_file_overrides_defaults() {
    let path = temp_config("base_url = \"http://10.0.0.5:8000/\"\nlog_filter = \"debug\"\n");
    let overrides = Overrides {
        config_path: Some(path.clone()),
        ..Overrides::default()
    };

    let settings = load_settings_with_env(&overrides, env_from(&[])).expect("settings");

    assert_eq!(settings.base_url, "http://10.0.0.5:8000");
    assert_eq!(settings.log_filter, "debug");
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn environment_beats_file_and_cli_beats_environment() {
    let path = temp_config("base_url = \"http://from-file:1\"\n");
    let overrides = Overrides {
        config_path: Some(path.clone()),
        base_url: None,
        log_filter: Some("warn".to_string()),
    };
    let env = env_from(&[
        ("PLAYGROUND_BASE_URL", "http://from-env:2"),
        ("PLAYGROUND_LOG_FILTER", "trace"),
    ]);

    let settings = load_settings_with_env(&overrides, env).expect("settings");

    assert_eq!(settings.base_url, "http://from-env:2");
    assert_eq!(settings.log_filter, "warn");
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn empty_environment_values_are_ignored() {
    let overrides = Overrides {
        config_path: Some(temp_config("")),
        ..Overrides::default()
    };
    let env = env_from(&[("APP__BASE_URL", "  ")]);

    let settings = load_settings_with_env(&overrides, env).expect("settings");

    assert_eq!(settings, Settings::default());
    if let Some(path) = &overrides.config_path {
        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let overrides = Overrides {
        config_path: Some(env::temp_dir().join("transformer_playground_missing/none.toml")),
        ..Overrides::default()
    };

    let err = load_settings_with_env(&overrides, env_from(&[])).expect_err("missing file");

    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_config_file_is_an_error() {
    let path = temp_config("base_url = [1, 2");
    let overrides = Overrides {
        config_path: Some(path.clone()),
        ..Overrides::default()
    };

    let err = load_settings_with_env(&overrides, env_from(&[])).expect_err("bad toml");

    assert!(matches!(err, ConfigError::Parse { .. }));
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn cli_base_url_is_validated() {
    let overrides = Overrides {
        config_path: Some(temp_config("")),
        base_url: Some("localhost".to_string()),
        log_filter: None,
    };

    let err = load_settings_with_env(&overrides, env_from(&[])).expect_err("no scheme");

    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    if let Some(path) = &overrides.config_path {
        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }
}
