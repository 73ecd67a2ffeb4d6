//! Runs the `list` subcommand through the real binary.

mod common;

use common::temp_config;
use std::process::{Command, Output};

fn vendorscope_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vendorscope"))
}

fn run_list(config: &str, args: &[&str]) -> Output {
    let (_dir, path) = temp_config(config);
    vendorscope_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let output = vendorscope_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("browse"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_list_prints_first_page() {
    let output = run_list("", &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("Showing 10 of 22"));
}

#[test]
fn test_list_json_with_filters() {
    let output = run_list(
        "",
        &["--category", "pharmacy", "--open", "--sort", "distance", "--asc", "--json"],
    );
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let vendors = value["vendors"].as_array().unwrap();
    assert!(!vendors.is_empty());
    assert!(vendors.iter().all(|v| v["category"] == "Pharmacy" && v["is_open"] == true));

    let distances: Vec<f64> = vendors
        .iter()
        .map(|v| v["distance_km"].as_f64().unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_denied_location_reports_error_and_excludes_by_distance() {
    let output = run_list(
        "[location]\nsource = \"denied\"\n",
        &["--max-distance", "10"],
    );
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Permission to access location was denied"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No vendors found"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let output = run_list("[discovery]\npage_size = 0\n", &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
}

#[test]
fn test_missing_fixture_exits_with_error() {
    let output = run_list("", &["--fixture", "/definitely/not/here.json"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load vendor fixture"));
}
