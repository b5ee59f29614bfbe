use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for the kernel's make: records every argument it gets, fails
/// checks listed under `fail/`, and prints `build.out` for `make all`.
const FAKE_MAKE: &str = r#"#!/bin/sh
here="$(dirname "$0")"
echo "$1" >> "$here/calls.log"
case "$1" in
  clean)
    echo "rm -rf build"
    ;;
  all)
    if [ -f "$here/build.out" ]; then cat "$here/build.out"; fi
    ;;
  *.result)
    name="$(basename "$1" .result)"
    if [ -f "$here/fail/$name" ]; then
      echo "FAIL $1"
      echo "run: expected 1, got 0" >&2
    else
      echo "pass $1"
    fi
    ;;
esac
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
    pub tools: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let tools = tmp.path().join("tools");
        fs::create_dir_all(&work).expect("create work dir");
        fs::create_dir_all(tools.join("fail")).expect("create tools dir");
        write_executable(&tools.join("make"), FAKE_MAKE);

        Self {
            _tmp: tmp,
            work,
            tools,
        }
    }

    pub fn fail(&self, check_id: &str) {
        fs::write(self.tools.join("fail").join(check_id), "").expect("mark failing check");
    }

    pub fn build_output(&self, text: &str) {
        fs::write(self.tools.join("build.out"), text).expect("write build output");
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.tools.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn check_runs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.ends_with(".result"))
            .collect()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pintgrade");
        cmd.env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--no-color")
            .arg("--dir")
            .arg(&self.work)
            .arg("--make")
            .arg(self.tools.join("make"));
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn write_executable(path: &Path, body: &str) {
    fs::write(path, body).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}
