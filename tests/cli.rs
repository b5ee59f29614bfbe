#![cfg(unix)]

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestEnv;
use predicates::str::contains;

#[test]
fn help_token_lists_suites() {
    let env = TestEnv::new();
    env.cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(contains("Help Menu -- Pintos Grader"))
        .stdout(contains("\t2 (priority) -> run all Priority Scheduling tests"))
        .stdout(contains("\t4 (mlfqs) -> run all MLFQS Scheduler tests"));
    assert!(env.calls().is_empty());
}

#[test]
fn userprog_profile_help() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--profile", "userprog", "help"])
        .assert()
        .success()
        .stdout(contains("\t6 (rw) -> run all SYS Read & Write tests"));
}

#[test]
fn unknown_selector_shows_help_and_no_summary() {
    let env = TestEnv::new();
    let out = env.stdout(&["99"]);
    assert!(out.contains("Help Menu"));
    assert!(!out.contains("Tests!"));
    assert!(env.calls().is_empty());
}

#[test]
fn no_tokens_prints_nothing() {
    let env = TestEnv::new();
    env.cmd().assert().success().stdout("");
}

#[test]
fn flag_help_describes_tokens() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("verbose"))
        .stdout(contains("--registry"));
}

#[test]
fn missing_build_tool_is_reported() {
    let env = TestEnv::new();
    cargo_bin_cmd!("pintgrade")
        .arg("--dir")
        .arg(&env.work)
        .args(["--make", "definitely-not-a-build-tool", "make"])
        .assert()
        .failure()
        .stderr(contains("definitely-not-a-build-tool all"));
}
