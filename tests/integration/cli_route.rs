//! Integration tests for the CLI route table

use super::test_utils::write_things_model;
use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;
use unipage::cli::{Cli, RunContext};
use unipage::config::UnipageConfig;
use unipage::error::CliError;

fn run(args: &[&str]) -> Result<String, CliError> {
    let temp_dir = TempDir::new().unwrap();
    let model_path = write_things_model(&temp_dir);
    let model_arg = model_path.to_string_lossy().to_string();

    let mut argv = vec!["unipage", "--model", model_arg.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    let context = RunContext::new(&cli.model, UnipageConfig::default())?;
    context.execute(&cli.command)
}

#[test]
fn test_operations_listing() {
    let text = run(&["operations"]).unwrap();
    assert!(text.contains("get-thing"));
    assert!(text.contains("list-versions"));

    let json: Value = serde_json::from_str(&run(&["operations", "--format", "json"]).unwrap()).unwrap();
    assert_eq!(json["service"], "things");
    let ops = json["operations"].as_array().unwrap();
    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0]["can_paginate"], false);
    assert_eq!(ops[1]["can_paginate"], true);
    assert_eq!(ops[2]["pagination"]["input_token"][1], "VersionIdMarker");
}

#[test]
fn test_describe_json() {
    let out = run(&["describe", "list-things", "--format", "json"]).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    let flags: Vec<&str> = json["arguments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["flag"].as_str().unwrap())
        .collect();
    assert_eq!(flags, vec!["--color", "--max-items", "--starting-token"]);

    let out = run(&["describe", "list-things", "--format", "json", "--all"]).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["arguments"].as_array().unwrap().len(), 5);
}

#[test]
fn test_invoke_with_unified_arguments() {
    let out = run(&[
        "invoke",
        "list-things",
        "--starting-token",
        "abc",
        "--max-items",
        "10",
    ])
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["pagination"]["enabled"], true);
    assert_eq!(json["parameters"]["starting_token"], "abc");
    assert_eq!(json["parameters"]["max_items"], 10);
}

#[test]
fn test_invoke_with_manual_token_disables_pagination() {
    let out = run(&["invoke", "list-things", "--next-token", "abc"]).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["pagination"]["enabled"], false);
    assert_eq!(json["parameters"]["NextToken"], "abc");
}

#[test]
fn test_invoke_no_paginate_flag() {
    let out = run(&["invoke", "--no-paginate", "list-things"]).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["pagination"]["enabled"], false);
}

#[test]
fn test_broken_operation_is_configuration_error() {
    let err = run(&["describe", "ListBroken"]).unwrap_err();
    assert!(matches!(err, CliError::Configuration(_)));
    assert!(unipage::cli::map_error(&err).contains("Unsupported pagination type boolean"));
}

#[test]
fn test_missing_model_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = RunContext::new(&temp_dir.path().join("none.json"), UnipageConfig::default());
    assert!(matches!(result, Err(CliError::Model(_))));
}
