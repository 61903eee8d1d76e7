#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Runs binaries with an isolated `HOME` so a developer's own
/// `~/.config/drills/config.toml` never leaks into assertions.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn with_config(toml: &str) -> Self {
        let env = Self::new();
        let dir = env.home.join(".config/drills");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), toml).expect("write config");
        env
    }

    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = match bin {
            "caesar" => cargo_bin_cmd!("caesar"),
            "cash" => cargo_bin_cmd!("cash"),
            "readability" => cargo_bin_cmd!("readability"),
            other => panic!("unknown binary {}", other),
        };
        cmd.env("HOME", &self.home).env_remove("DRILLS_LOG");
        cmd
    }

    pub fn run_json(&self, bin: &str, args: &[&str], stdin: &str) -> Value {
        let out = self
            .cmd(bin)
            .arg("--json")
            .args(args)
            .write_stdin(stdin)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
