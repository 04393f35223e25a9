//! Shared fixtures for integration tests.
#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory holding capture fixtures
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let fixtures = Self { dir };
        fixtures.write_json("page.json", &capture_json("https://example.com", 0.1));
        fixtures.write_json("moved.json", &capture_json("https://example.com", 0.4));
        fixtures.write("broken.json", "not json{{{");
        fixtures.write("empty.json", "{}");
        fixtures
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write(name, &value.to_string())
    }

    /// `websketch` running inside the fixture directory
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("websketch");
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Run with arguments and parse stdout as one JSON line
    pub fn run_json(&self, args: &[&str]) -> (i32, Value) {
        let output = self.cmd().args(args).output().expect("run websketch");
        assert!(output.stderr.is_empty(), "stderr must stay empty in JSON mode");

        let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
        assert_eq!(stdout.trim_end().lines().count(), 1, "expected one line: {}", stdout);

        let value = serde_json::from_str(stdout.trim_end()).expect("valid json output");
        (output.status.code().unwrap_or(-1), value)
    }
}

/// Minimal valid capture: a page with a header and a login button
pub fn capture_json(url: &str, button_x: f64) -> Value {
    json!({
        "version": "0.1",
        "url": url,
        "timestamp_ms": 1_700_000_000_000u64,
        "viewport": { "w_px": 1280, "h_px": 720, "aspect": 1.7778 },
        "compiler": { "name": "websketch-ir", "version": "0.2.1", "options_hash": "abc123" },
        "root": {
            "id": "",
            "role": "PAGE",
            "bbox": [0, 0, 1, 1],
            "interactive": false,
            "visible": true,
            "children": [
                {
                    "id": "hdr",
                    "role": "HEADER",
                    "bbox": [0, 0, 1, 0.1],
                    "interactive": false,
                    "visible": true
                },
                {
                    "id": "login",
                    "role": "BUTTON",
                    "bbox": [button_x, 0.5, 0.2, 0.08],
                    "interactive": true,
                    "visible": true,
                    "name": "Log in",
                    "text": { "hash": "h-login", "len": 6, "snippet": "Log in" }
                }
            ]
        }
    })
}
