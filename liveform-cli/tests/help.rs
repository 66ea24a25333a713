use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("liveform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("liveform"))
        .stdout(contains("--save-schema"));
}

#[test]
fn rejects_a_schema_without_fields() {
    let mut cmd = cargo::cargo_bin_cmd!("liveform");
    cmd.args(["--schema", r#"{"formTitle": "No fields"}"#])
        .assert()
        .failure()
        .stderr(contains("Invalid schema structure"));
}

#[test]
fn rejects_malformed_schema_text() {
    let mut cmd = cargo::cargo_bin_cmd!("liveform");
    cmd.args(["--schema", "-"])
        .write_stdin("{\"formTitle\": ")
        .assert()
        .failure()
        .stderr(contains("input (schema)"));
}

#[test]
fn refuses_to_overwrite_outputs_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("record.json");
    std::fs::write(&existing, "{}").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("liveform");
    cmd.arg("--output")
        .arg(&existing)
        .assert()
        .failure()
        .stderr(contains("already exists"));
}
