#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("synth"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("show"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skystack"));
}

/// validateが8宣言を列挙することを確認
#[test]
fn test_validate_lists_declarations() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("validate")
        .args(["--project", "skystack-demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 宣言"))
        .stdout(predicate::str::contains("artifact-registry"))
        .stdout(predicate::str::contains("runtime-account"))
        .stdout(predicate::str::contains("service-no-auth"));
}

/// 匿名アクセス警告がstderrに出ることを確認
#[test]
fn test_validate_warns_about_anonymous_access() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("allUsers"));
}

/// 空のプロジェクトIDで失敗することを確認
#[test]
fn test_validate_rejects_empty_project() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("validate")
        .args(["--project", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project_id"));
}

/// 不正なリポジトリIDで失敗することを確認
#[test]
fn test_validate_rejects_malformed_repository() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("validate")
        .args(["--repository", "Bad_Repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository_id"));
}

/// synthがプランドキュメントを書き出すことを確認
#[test]
fn test_synth_writes_plan_document() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("sky").unwrap();
    cmd.arg("synth")
        .args(["--project", "p-demo"])
        .args(["--region", "r"])
        .args(["--repository", "repo"])
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("p-demo.plan.json"));

    let written =
        std::fs::read_to_string(temp_dir.path().join("p-demo.plan.json")).unwrap();
    assert!(written.contains("\"format\": \"docker\""));
    assert!(written.contains("roles/run.invoker"));
    assert!(written.contains("app.terraform.io"));
}

/// showがstdoutにJSONのみを出力することを確認
#[test]
fn test_show_prints_plan_json() {
    let mut cmd = Command::cargo_bin("sky").unwrap();
    let assert = cmd
        .arg("show")
        .args(["--workspace", "demo-ws"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": 1"))
        .stdout(predicate::str::contains("demo-ws"));

    // stdout全体が1つのJSONドキュメントとしてパースできる
    let output = assert.get_output();
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.trim_start().starts_with('{'));
    assert!(stdout.trim_end().ends_with('}'));
}
