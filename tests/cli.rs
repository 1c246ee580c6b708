use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the binary inside `dir` with no user config in reach.
fn recase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("RECASE_PRESET")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn converts_arguments_to_kebab_case() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "kebab", "firstName", "user_id", "SCREEN NAME", "mobile-number_ID"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firstName → first-name"))
        .stdout(predicate::str::contains("user_id → user-id"))
        .stdout(predicate::str::contains("SCREEN NAME → screen-name"))
        .stdout(predicate::str::contains("mobile-number_ID → mobile-number-id"))
        .stdout(predicate::str::contains("4 values converted"));
}

#[test]
fn strict_mode_fails_on_separators_only() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "kebab", "---___   "])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("input contains no alphanumeric words"));
}

#[test]
fn lenient_mode_returns_empty_output() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "kebab", "--lenient", "---___   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 value converted"));
}

#[test]
fn values_may_start_with_hyphens() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "kebab", "-leading", "--double", "__init__"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-leading → leading"))
        .stdout(predicate::str::contains("--double → double"))
        .stdout(predicate::str::contains("__init__ → init"));
}

#[test]
fn no_fail_keeps_exit_code_zero() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "dot", "--no-fail", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 value could not be converted"));
}

#[test]
fn reads_values_from_stdin() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "camel"])
        .write_stdin("hello world\nPascalCase\nXMLHttpRequest\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world → helloWorld"))
        .stdout(predicate::str::contains("PascalCase → pascalCase"))
        .stdout(predicate::str::contains("XMLHttpRequest → xmlHttpRequest"));
}

#[test]
fn json_input_reports_non_string_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.json");
    fs::write(&path, r#"["firstName", null, 42]"#).unwrap();

    let output = recase(&dir)
        .args(["--to", "kebab", "--format", "json", "--input"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["converted"], 1);
    assert_eq!(report["failed"], 2);
    assert_eq!(report["results"][0]["output"], "first-name");
    assert_eq!(
        report["results"][1]["error"],
        "input must be a non-null string, got null"
    );
    assert_eq!(
        report["results"][2]["error"],
        "input must be a non-null string, got number"
    );
}

#[test]
fn json_output_is_one_document_for_many_inputs() {
    let dir = TempDir::new().unwrap();
    let names = dir.path().join("names.txt");
    let values = dir.path().join("values.json");
    fs::write(&names, "firstName\nuser_id\n").unwrap();
    fs::write(&values, r#"["SCREEN NAME"]"#).unwrap();

    let output = recase(&dir)
        .args(["--to", "dot", "--format", "json", "--input"])
        .arg(&names)
        .arg("--input")
        .arg(&values)
        .output()
        .unwrap();

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["converted"], 2);
    assert_eq!(reports[0]["results"][1]["output"], "user.id");
    assert_eq!(reports[1]["results"][0]["output"], "screen.name");
}

#[test]
fn legacy_lenient_preset_ignores_non_strings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.json");
    fs::write(&path, r#"[null, "hello world"]"#).unwrap();

    recase(&dir)
        .args(["--to", "camel-basic", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world → helloWorld"))
        .stdout(predicate::str::contains("2 values converted"));
}

#[test]
fn local_config_sets_preset() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".recase.toml"), "preset = \"dot\"\n").unwrap();

    recase(&dir)
        .arg("firstName")
        .assert()
        .success()
        .stdout(predicate::str::contains("firstName → first.name"));
}

#[test]
fn command_line_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".recase.toml"), "preset = \"dot\"\n").unwrap();

    recase(&dir)
        .args(["--to", "kebab", "firstName"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firstName → first-name"));
}

#[test]
fn ignore_pattern_passes_values_through() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "camel", "--ignore-pattern", "^[A-Z_]+$", "MAX_VALUE", "max_value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MAX_VALUE → MAX_VALUE"))
        .stdout(predicate::str::contains("max_value → maxValue"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--input", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: does-not-exist.txt"));
}

#[test]
fn lists_presets() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("kebab-legacy"))
        .stdout(predicate::str::contains("dot-strict"));
}

#[test]
fn shows_tokens() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["tokens", "XMLHttpRequest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XMLHttpRequest → XML | Http | Request"));
}

#[test]
fn rejects_unknown_preset() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--to", "snake", "firstName"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset: snake"));
}
