use std::io::Write;
use std::process::{Command, Output};

const RECURSIVE_JSON: &str = r#"{
  "schemas": {
    "A": { "type": "object", "properties": { "b": { "$ref": "B" } } },
    "B": {
      "type": "object",
      "properties": { "a": { "$ref": "A" }, "flag": { "type": "boolean" } }
    }
  }
}"#;

fn discoveryexample(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_discoveryexample"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run discoveryexample")
}

fn document_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(RECURSIVE_JSON.as_bytes())
        .expect("write discovery document");
    file
}

#[test]
fn missing_arguments_print_usage() {
    let actual: Output = discoveryexample(&[]);
    assert!(!actual.status.success());
    assert!(actual.stdout.is_empty());
    let stderr: String = String::from_utf8_lossy(&actual.stderr).into_owned();
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn stdout_is_json_and_warning_is_on_stderr() {
    let file = document_file();
    let path: &str = file.path().to_str().expect("utf-8 temp path");
    let actual: Output = discoveryexample(&[path, "A"]);
    assert!(actual.status.success());

    let example: serde_json::Value =
        serde_json::from_slice(&actual.stdout).expect("stdout is only JSON");
    assert_eq!(
        serde_json::json!({ "b": { "a": {}, "flag": true } }),
        example
    );

    let stderr: String = String::from_utf8(actual.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("WARN"), "{stderr}");
    assert!(stderr.contains(r#"type_name="A""#), "{stderr}");
    assert!(stderr.contains("parents=A->B"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "no colour when stderr is not a terminal");
}

#[test]
fn output_flag_writes_file() {
    let file = document_file();
    let dir = tempfile::tempdir().expect("create temp dir");
    let output_path = dir.path().join("b.json");
    let actual: Output = discoveryexample(&[
        file.path().to_str().expect("utf-8 temp path"),
        "B",
        "--output",
        output_path.to_str().expect("utf-8 output path"),
    ]);
    assert!(actual.status.success());
    assert!(actual.stdout.is_empty());

    let written: String = std::fs::read_to_string(&output_path).expect("output written");
    assert!(written.ends_with('\n'));
    let example: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");
    assert_eq!(
        serde_json::json!({ "a": { "b": {} }, "flag": true }),
        example
    );
}

#[test]
fn generation_error_exits_with_status_one() {
    let file = document_file();
    let path: &str = file.path().to_str().expect("utf-8 temp path");
    let actual: Output = discoveryexample(&[path, "A", "--deny-recursive-types"]);
    assert_eq!(Some(1), actual.status.code());
    assert!(actual.stdout.is_empty());
    let stderr: String = String::from_utf8_lossy(&actual.stderr).into_owned();
    assert!(
        stderr.contains("Error: recursive type `A` found within itself (parents: A->B)"),
        "{stderr}"
    );
}
