//! End-to-end tests for `confguard check` and the report renderers.

use assert_cmd::Command;
use confguard_test_util::{normalize_nondeterministic, relativize_files};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn confguard_cmd() -> Command {
    Command::cargo_bin("confguard").expect("confguard binary")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("confguard-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
}

fn products() -> PathBuf {
    fixtures_dir().join("policy").join("products.yaml")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read report");
    serde_json::from_str(&text).expect("report is JSON")
}

fn configs(name: &str) -> PathBuf {
    fixtures_dir().join("configs").join(name)
}

#[test]
fn clean_configs_pass() {
    let products = products();
    let dir = configs("clean");
    confguard_cmd()
        .args(["check", arg(&dir), "--products", arg(&products)])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Loaded rules for 2 product(s):"))
        .stdout(predicate::str::contains("  - gateway: 3 rule(s)"))
        .stdout(predicate::str::contains("  - service: 2 rule(s)"))
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn failing_config_exits_two_with_findings() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let report_out = tmp.path().join("out").join("report.json");
    let products = products();
    let dir = configs("failing");

    confguard_cmd()
        .args([
            "check",
            arg(&dir),
            "--products",
            arg(&products),
            "--report-out",
            arg(&report_out),
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[ERROR] GW-001 Listener port in range"))
        .stdout(predicate::str::contains("actual: 70000"))
        .stdout(predicate::str::contains("3 error(s)"))
        .stdout(predicate::str::contains("1 warning(s)"));

    let report = read_json(&report_out);
    let report = relativize_files(
        normalize_nondeterministic(report),
        arg(&fixtures_dir()),
    );

    assert_eq!(report["schema"], "confguard.report.v1");
    assert_eq!(report["tool"]["name"], "confguard");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(
        report["data"],
        json!({
            "files_scanned": 1,
            "files_skipped": 0,
            "rules_loaded": 3,
            "findings_total": 4,
            "products": {"gateway": 3}
        })
    );

    let summary: Vec<(String, String, String)> = report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .map(|f| {
            (
                f["rule_id"].as_str().unwrap_or_default().to_string(),
                f["severity"].as_str().unwrap_or_default().to_string(),
                f["path"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let expected = [
        ("GW-001", "error", "server.port"),
        ("GW-002", "error", "routes[0].name"),
        ("GW-002", "error", "routes[2].name"),
        ("GW-003", "warning", "server.tls"),
    ];
    assert_eq!(
        summary,
        expected
            .iter()
            .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
            .collect::<Vec<_>>()
    );

    let first = &report["findings"][0];
    assert_eq!(first["file"], "configs/failing/gateway/main.yaml");
    assert_eq!(first["actual_value"], "70000");
    assert_eq!(first["expected_value"], "1 - 65535");
    assert_eq!(
        report["findings"][1]["message"],
        "route names must be unique (duplicate value: users)"
    );
    assert_eq!(report["findings"][3]["actual_value"], "string");
    assert_eq!(report["findings"][3]["expected_value"], "boolean");
}

#[test]
fn warnings_only_exit_zero() {
    let products = products();
    let dir = configs("warn");
    let output = confguard_cmd()
        .args(["check", arg(&dir), "--products", arg(&products), "--json"])
        .output()
        .expect("run confguard");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["verdict"], "warn");

    let paths: Vec<&str> = report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .map(|f| f["path"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(paths, vec!["deployments[1].env", "metadata.team"]);
}

#[test]
fn undetected_files_are_skipped() {
    let products = products();
    let dir = configs("unknown");
    let output = confguard_cmd()
        .args(["check", arg(&dir), "--products", arg(&products), "--json"])
        .output()
        .expect("run confguard");

    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["data"]["files_scanned"], 0);
    assert_eq!(report["data"]["files_skipped"], 1);
}

#[test]
fn rules_dir_mode_bypasses_product_detection() {
    let rules = fixtures_dir().join("policy").join("rules").join("gateway");
    let file = configs("failing").join("gateway").join("main.yaml");
    let output = confguard_cmd()
        .args(["check", arg(&file), "--rules-dir", arg(&rules), "--json"])
        .output()
        .expect("run confguard");

    assert_eq!(output.status.code(), Some(2));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["data"]["products"], json!({"default": 3}));
    assert_eq!(report["data"]["findings_total"], 4);
}

#[test]
fn malformed_target_is_a_runtime_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let report_out = tmp.path().join("report.json");
    let rules = fixtures_dir().join("policy").join("rules").join("gateway");
    let dir = configs("broken");

    confguard_cmd()
        .args([
            "check",
            arg(&dir),
            "--rules-dir",
            arg(&rules),
            "--report-out",
            arg(&report_out),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("confguard error:"))
        .stderr(predicate::str::contains("gateway.yaml"));

    let report = read_json(&report_out);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["rule_id"], "tool.runtime");
    assert_eq!(report["findings"][0]["severity"], "error");
}

#[test]
fn missing_path_is_a_runtime_error() {
    let products = products();
    let missing = fixtures_dir().join("does-not-exist");
    confguard_cmd()
        .args(["check", arg(&missing), "--products", arg(&products)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn markdown_and_annotations_render_from_report() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let report_out = tmp.path().join("report.json");
    let md_out = tmp.path().join("comment.md");
    let products = products();
    let dir = configs("failing");

    confguard_cmd()
        .args([
            "check",
            arg(&dir),
            "--products",
            arg(&products),
            "--report-out",
            arg(&report_out),
            "--write-markdown",
            "--markdown-out",
            arg(&md_out),
        ])
        .assert()
        .code(2);

    let md = std::fs::read_to_string(&md_out).expect("markdown written");
    assert!(md.contains("Verdict: **FAIL**"), "{md}");

    confguard_cmd()
        .args(["md", "--report", arg(&report_out)])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Confguard report"))
        .stdout(predicate::str::contains("`GW-002`"));

    let output = confguard_cmd()
        .args(["annotations", "--report", arg(&report_out), "--max", "2"])
        .output()
        .expect("run confguard");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("::error file="), "{}", lines[0]);
    assert!(
        lines[0].ends_with(",title=GW-001::server.port must be a valid TCP port (path: server.port)"),
        "{}",
        lines[0]
    );
}

#[test]
fn explain_known_and_unknown_kinds() {
    confguard_cmd()
        .args(["explain", "hashed_value_check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type: hashed_value_check"));

    confguard_cmd()
        .args(["explain", "no_such_kind"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown rule kind: no_such_kind"))
        .stderr(predicate::str::contains("required_field"));
}
