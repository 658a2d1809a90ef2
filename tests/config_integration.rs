//! Configuration loading integration tests
//!
//! These exercise the full figment stack (toml files + environment
//! variables), so tests that touch the environment run serially.

use craftview::config::AppConfig;
use serial_test::serial;
use std::path::{Path, PathBuf};

/// Temp config directory that is removed even when the test panics
struct TempConfigDir(PathBuf);

impl TempConfigDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, file: &str, contents: &str) {
        std::fs::write(self.0.join(file), contents).unwrap();
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempConfigDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
#[serial]
fn test_load_from_missing_dir_gives_defaults() {
    // No config files, no CV_ vars: every section falls back to defaults
    let config = AppConfig::load_from("nonexistent_config_dir").unwrap();
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.camera.fov, 90.0);
    assert_eq!(config.input.move_speed, 1.0);
}

#[test]
#[serial]
fn test_load_from_toml_file() {
    let dir = TempConfigDir::new("craftview_config_test");
    dir.write(
        "default.toml",
        r#"
[window]
title = "from-file"
width = 1024

[input]
move_speed = 2.5
"#,
    );

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "from-file");
    assert_eq!(config.window.width, 1024);
    // Unset keys in a present section still default
    assert_eq!(config.window.height, 600);
    assert_eq!(config.input.move_speed, 2.5);
}

#[test]
#[serial]
fn test_user_toml_overrides_default() {
    let dir = TempConfigDir::new("craftview_config_override_test");
    dir.write("default.toml", "[camera]\nfov = 75.0\n");
    // user.toml supplies one key of a two-key section; the rest must come
    // from the lower layers, not fail extraction
    dir.write("user.toml", "[camera]\nfov = 110.0\n");

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.camera.fov, 110.0);
    assert_eq!(config.camera.start_position, [0.0, 0.0, 10.0]);
}

#[test]
#[serial]
fn test_env_var_overrides_file() {
    let dir = TempConfigDir::new("craftview_config_env_test");
    dir.write("default.toml", "[window]\ntitle = \"file\"\n");

    // The variable is removed before any assertion so a failure here cannot
    // leak state into the other serial tests
    std::env::set_var("CV_WINDOW__TITLE", "from-env");
    let result = AppConfig::load_from(dir.path());
    std::env::remove_var("CV_WINDOW__TITLE");

    let config = result.unwrap();
    assert_eq!(config.window.title, "from-env");
}

#[test]
#[serial]
fn test_single_env_var_with_no_files() {
    // One CV_ var and nothing else is a partial section over pure defaults
    std::env::set_var("CV_WINDOW__WIDTH", "1280");
    let result = AppConfig::load_from("nonexistent_config_dir");
    std::env::remove_var("CV_WINDOW__WIDTH");

    let config = result.unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.title, "craftview");
    assert_eq!(config.window.height, 600);
}
