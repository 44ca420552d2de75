//! Integration tests for Configuration System

use super::test_utils::with_config_env;
use tempfile::TempDir;
use unipage::config::ConfigLoader;

#[test]
fn test_global_config_applies() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_config_env(&temp_dir, || {
        let global = ConfigLoader::global_config_path().unwrap();
        assert_eq!(global, temp_dir.path().join("xdg/unipage/config.toml"));
        std::fs::write(&global, "[pagination]\nenabled = false\n").unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert!(!config.pagination.enabled);
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_workspace_overrides_global() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_config_env(&temp_dir, || {
        let global = ConfigLoader::global_config_path().unwrap();
        std::fs::write(&global, "[logging]\nlevel = \"error\"\nformat = \"json\"\n").unwrap();

        let config_dir = workspace.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[logging]\nlevel = \"info\"\n").unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    });
}

#[test]
fn test_env_specific_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_config_env(&temp_dir, || {
        let config_dir = workspace.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[logging]\nlevel = \"info\"\n").unwrap();
        std::fs::write(config_dir.join("ci.toml"), "[logging]\nlevel = \"debug\"\n").unwrap();

        std::env::set_var("UNIPAGE_ENV", "ci");
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    });
}

#[test]
fn test_explicit_file_skips_layers() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    with_config_env(&temp_dir, || {
        let global = ConfigLoader::global_config_path().unwrap();
        std::fs::write(&global, "[pagination]\nenabled = false\n").unwrap();

        let explicit = workspace.path().join("unipage.toml");
        std::fs::write(&explicit, "[logging]\noutput = \"stdout\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&explicit).unwrap();
        assert!(config.pagination.enabled);
        assert_eq!(config.logging.output, "stdout");
    });
}
