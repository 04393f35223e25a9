//! Output protocol: JSON envelope vs text + stderr, and exit-code mapping.

mod common;

use common::Fixtures;
use predicates::prelude::*;
use predicates::str::contains;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Every command, with the path argument(s) replaced by `path`
fn every_command(path: &str) -> Vec<Vec<String>> {
    [
        vec!["validate", path],
        vec!["render", path],
        vec!["fingerprint", path],
        vec!["diff", path, path],
        vec!["bundle", path],
    ]
    .into_iter()
    .map(|args| args.into_iter().map(String::from).collect())
    .collect()
}

#[test]
fn test_validate_json_envelope() {
    let fx = Fixtures::new();
    let (code, value) = fx.run_json(&["--json", "validate", "page.json"]);
    assert_eq!(code, 0);
    assert_eq!(value, json!({ "ok": true, "valid": true }));
}

#[test]
fn test_success_fields_per_command() {
    let fx = Fixtures::new();

    let (_, value) = fx.run_json(&["--json", "render", "page.json"]);
    assert!(value["ascii"].is_string());

    let (_, value) = fx.run_json(&["fp", "page.json", "--json"]);
    let fingerprint = value["fingerprint"].as_str().unwrap();
    assert_eq!(fingerprint.len(), 8);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_missing_file_everywhere() {
    let fx = Fixtures::new();
    for args in every_command("nope.json") {
        let mut json_args = vec!["--json".to_string()];
        json_args.extend(args.iter().cloned());
        let json_refs: Vec<&str> = json_args.iter().map(String::as_str).collect();

        let (code, value) = fx.run_json(&json_refs);
        assert_eq!(code, 2, "{:?}", args);
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "WS_NOT_FOUND");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nope.json"));

        fx.cmd()
            .args(&args)
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(contains("[WS_NOT_FOUND]"))
            .stderr(contains("hint: Check the file path and try again."));
    }
}

#[test]
fn test_invalid_json_everywhere() {
    let fx = Fixtures::new();
    for args in every_command("broken.json") {
        fx.cmd()
            .args(&args)
            .assert()
            .code(1)
            .stderr(contains("[WS_INVALID_JSON]"));
    }
}

#[test]
fn test_invalid_capture_everywhere() {
    let fx = Fixtures::new();
    for args in every_command("empty.json") {
        fx.cmd()
            .args(&args)
            .assert()
            .code(1)
            .stderr(contains("WS_INVALID_CAPTURE"));
    }

    let (code, value) = fx.run_json(&["--json", "render", "empty.json"]);
    assert_eq!(code, 1);
    assert_eq!(value["error"]["code"], "WS_INVALID_CAPTURE");
}

#[test]
fn test_unknown_command_both_modes() {
    let fx = Fixtures::new();

    fx.cmd()
        .arg("bogus")
        .assert()
        .code(1)
        .stdout(contains("Exit Codes"))
        .stderr(contains("[WS_INVALID_ARGS] Unknown command: bogus"));

    let (code, value) = fx.run_json(&["--json", "bogus"]);
    assert_eq!(code, 1);
    assert_eq!(value["error"]["code"], "WS_INVALID_ARGS");
}

#[test]
fn test_missing_argument_is_invalid_args() {
    let fx = Fixtures::new();
    for command in ["validate", "render", "fingerprint"] {
        fx.cmd()
            .arg(command)
            .assert()
            .code(1)
            .stderr(contains("[WS_INVALID_ARGS] Missing capture file path"))
            .stderr(contains("websketch --help"));
    }
}

#[test]
fn test_modes_agree_on_exit_codes() {
    let fx = Fixtures::new();
    let cases: &[&[&str]] = &[
        &["validate", "page.json"],
        &["validate", "nope.json"],
        &["render", "broken.json"],
        &["fingerprint", "empty.json"],
        &["diff", "page.json"],
        &["bogus"],
    ];

    for args in cases {
        let text_code = fx.cmd().args(*args).output().unwrap().status.code();

        let mut json_args = vec!["--json"];
        json_args.extend_from_slice(args);
        let (json_code, _) = fx.run_json(&json_args);

        assert_eq!(text_code, Some(json_code), "{:?}", args);
    }
}
