//! Shared test utilities for integration tests
//!
//! Model fixtures plus isolated config environment setup.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    unipage_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            unipage_env: std::env::var("UNIPAGE_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("UNIPAGE_ENV", self.unipage_env);
    }
}

fn restore_var(name: &str, value: Option<String>) {
    match value {
        Some(orig) => std::env::set_var(name, orig),
        None => std::env::remove_var(name),
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`.
///
/// The global config file lives at `<test_dir>/xdg/unipage/config.toml`.
pub fn with_config_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("xdg");
    std::fs::create_dir_all(&test_home).unwrap();
    std::fs::create_dir_all(test_config_home.join("unipage")).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);
    std::env::remove_var("UNIPAGE_ENV");

    let result = f();

    env_state.restore();

    result
}

/// Service model with one plain and several paginating operations.
pub const THINGS_MODEL: &str = r#"{
  "service": "things",
  "operations": [
    {
      "name": "GetThing",
      "params": [
        {"name": "ThingId", "type": "string", "required": true}
      ]
    },
    {
      "name": "ListThings",
      "documentation": "Lists things.",
      "pagination": {
        "input_token": "NextToken",
        "output_token": "NextToken",
        "limit_key": "MaxResults",
        "result_key": "Things"
      },
      "params": [
        {"name": "Color", "type": "string", "documentation": "Only things of this color."},
        {"name": "NextToken", "type": "string"},
        {"name": "MaxResults", "type": "integer"}
      ]
    },
    {
      "name": "ListVersions",
      "pagination": {
        "input_token": ["KeyMarker", "VersionIdMarker"],
        "limit_key": "MaxKeys"
      },
      "params": [
        {"name": "KeyMarker", "type": "string"},
        {"name": "VersionIdMarker", "type": "string"},
        {"name": "MaxKeys", "type": "string"}
      ]
    },
    {
      "name": "ListBroken",
      "pagination": {"input_token": "Marker", "limit_key": "Limit"},
      "params": [
        {"name": "Marker", "type": "string"},
        {"name": "Limit", "type": "boolean"}
      ]
    }
  ]
}"#;

/// Write [`THINGS_MODEL`] to `<dir>/things.json`.
pub fn write_things_model(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("things.json");
    std::fs::write(&path, THINGS_MODEL).unwrap();
    path
}
