//! Process-level tests for each command in text mode.

mod common;

use common::Fixtures;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;

#[test]
fn test_help_lists_commands_and_exit_codes() {
    let fx = Fixtures::new();
    for flag in [None, Some("--help"), Some("-h")] {
        let mut cmd = fx.cmd();
        if let Some(flag) = flag {
            cmd.arg(flag);
        }
        cmd.assert()
            .success()
            .stdout(contains("validate"))
            .stdout(contains("render"))
            .stdout(contains("bundle"))
            .stdout(contains("--json"))
            .stdout(contains("Exit Codes"));
    }
}

#[test]
fn test_version_matches_package() {
    let fx = Fixtures::new();
    let expected = format!("websketch v{}", env!("CARGO_PKG_VERSION"));
    fx.cmd().arg("--version").assert().success().stdout(contains(expected.clone()));
    fx.cmd().arg("-v").assert().success().stdout(contains(expected));
}

#[test]
fn test_validate_reports_capture_fields() {
    let fx = Fixtures::new();
    fx.cmd()
        .args(["validate", "page.json"])
        .assert()
        .success()
        .stdout(contains("Valid"))
        .stdout(contains("https://example.com"))
        .stdout(contains("Nodes: 3"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_render_variants() {
    let fx = Fixtures::new();

    fx.cmd()
        .args(["render", "page.json", "--width", "60", "--height", "20"])
        .assert()
        .success()
        .stdout(contains("┌"));

    for alias in ["render-ascii", "ascii"] {
        fx.cmd().args([alias, "page.json"]).assert().success();
    }

    fx.cmd()
        .args(["render", "--structure", "--llm", "page.json"])
        .assert()
        .success()
        .stdout(contains("# WebSketch Capture"))
        .stdout(contains("## Interactive Elements"));
}

#[test]
fn test_fingerprint_is_eight_hex_chars() {
    let fx = Fixtures::new();
    let hex = predicate::str::is_match(r"^[0-9a-f]{8}\n$").unwrap();

    fx.cmd().args(["fingerprint", "page.json"]).assert().success().stdout(hex);

    let hex = predicate::str::is_match(r"^[0-9a-f]{8}\n$").unwrap();
    fx.cmd()
        .args(["fp", "--layout-only", "page.json"])
        .assert()
        .success()
        .stdout(hex);
}

#[test]
fn test_diff_text_reports() {
    let fx = Fixtures::new();

    fx.cmd()
        .args(["diff", "page.json", "page.json"])
        .assert()
        .success()
        .stdout(contains("Identical"));

    fx.cmd()
        .args(["diff", "page.json", "moved.json"])
        .assert()
        .success()
        .stdout(contains("MOVED"))
        .stdout(contains("PAGE/BUTTON[0]"));
}

#[test]
fn test_unknown_flags_are_ignored() {
    let fx = Fixtures::new();
    fx.cmd()
        .args(["validate", "--no-such-flag", "page.json"])
        .assert()
        .success();
}

#[test]
fn test_deeply_nested_capture_is_valid() {
    let fx = Fixtures::new();
    let mut capture = common::capture_json("https://example.com", 0.1);
    let mut node = json!({
        "id": "leaf", "role": "BUTTON", "bbox": [0, 0, 1, 1],
        "interactive": true, "visible": true
    });
    for i in 0..80 {
        node = json!({
            "id": format!("s{}", i), "role": "SECTION", "bbox": [0, 0, 1, 1],
            "interactive": false, "visible": true, "children": [node]
        });
    }
    capture["root"]["children"] = json!([node]);
    fx.write_json("deep.json", &capture);

    let (code, value) = fx.run_json(&["--json", "validate", "deep.json"]);
    assert_eq!(code, 0);
    assert_eq!(value, json!({ "ok": true, "valid": true }));

    fx.cmd()
        .args(["validate", "deep.json"])
        .assert()
        .success()
        .stdout(contains("Nodes: 82"));
}

#[test]
fn test_absurd_nesting_is_invalid_capture() {
    let fx = Fixtures::new();
    fx.write("nested.json", &format!("{}{}", "[".repeat(2000), "]".repeat(2000)));

    let (code, value) = fx.run_json(&["--json", "validate", "nested.json"]);
    assert_eq!(code, 1);
    assert_eq!(value["error"]["code"], "WS_INVALID_CAPTURE");
    assert!(value["error"]["message"].as_str().unwrap().contains("nesting too deep"));
}
