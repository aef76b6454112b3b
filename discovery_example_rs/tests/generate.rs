use std::io::Write;

use discovery_example_rs::{
    ExampleGenError, GenerateSettings, RecursionWarning, generate_from_file, generate_to_writer,
};

const DISCOVERY_JSON: &str = r#"{
  "kind": "discovery#restDescription",
  "name": "compute",
  "version": "v1",
  "schemas": {
    "Instance": {
      "id": "Instance",
      "type": "object",
      "description": "A virtual machine.",
      "properties": {
        "name": { "type": "string", "pattern": "[a-z]+" },
        "id": { "type": "string", "format": "int64" },
        "cpus": { "type": "integer", "format": "int32", "minimum": "1" },
        "creationTimestamp": { "type": "string", "format": "date-time" },
        "labels": { "type": "object", "additionalProperties": { "type": "string" } },
        "disks": { "type": "array", "items": { "$ref": "AttachedDisk" } },
        "metadata": { "type": "any" }
      }
    },
    "AttachedDisk": {
      "id": "AttachedDisk",
      "type": "object",
      "properties": {
        "boot": { "type": "boolean" },
        "sizeGb": { "type": "number", "format": "double" },
        "instance": { "$ref": "Instance" }
      }
    }
  }
}"#;

const EXPECTED_INSTANCE: &str = r#"{
  "cpus": -2147483648,
  "creationTimestamp": "2031-11-30T23:00:30.123Z",
  "disks": [
    {
      "boot": true,
      "instance": {},
      "sizeGb": -0.1
    }
  ],
  "id": "-9223372036854775808",
  "labels": {
    "RANDOM_PROPERTY_NAME": "RANDOM_STRING"
  },
  "metadata": {
    "@type": "type.googleapis.com/google.protobuf.Empty"
  },
  "name": "RANDOM_STRING"
}
"#;

#[test]
fn writes_sorted_indented_json_with_trailing_newline() {
    let mut output: Vec<u8> = Vec::new();
    let warnings: Vec<RecursionWarning> = generate_to_writer(
        DISCOVERY_JSON,
        "Instance",
        &mut output,
        &GenerateSettings::default(),
    )
    .expect("generation succeeds");
    let actual: String = String::from_utf8(output).expect("utf-8 output");
    assert_eq!(EXPECTED_INSTANCE, actual);

    let expected_warnings: Vec<RecursionWarning> = vec![RecursionWarning {
        type_name: "Instance".to_string(),
        parents: vec!["Instance".to_string(), "AttachedDisk".to_string()],
    }];
    assert_eq!(expected_warnings, warnings);
    assert_eq!("Instance->AttachedDisk->Instance", warnings[0].cycle_display());
}

#[test]
fn reads_document_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(DISCOVERY_JSON.as_bytes())
        .expect("write discovery document");

    let mut output: Vec<u8> = Vec::new();
    generate_from_file(
        file.path(),
        "AttachedDisk",
        &mut output,
        &GenerateSettings::default(),
    )
    .expect("generation succeeds");

    let actual: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(serde_json::json!(true), actual["boot"]);
    assert_eq!(serde_json::json!(-0.1), actual["sizeGb"]);
    assert_eq!(serde_json::json!({}), actual["instance"]["disks"][0]);
}

#[test]
fn same_input_gives_same_output() {
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    let settings = GenerateSettings::default();
    generate_to_writer(DISCOVERY_JSON, "Instance", &mut first, &settings).expect("first run");
    generate_to_writer(DISCOVERY_JSON, "Instance", &mut second, &settings).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut output: Vec<u8> = Vec::new();
    let actual = generate_from_file(
        dir.path().join("missing.json"),
        "Instance",
        &mut output,
        &GenerateSettings::default(),
    );
    assert!(matches!(actual, Err(ExampleGenError::IoError(_))));
    assert!(output.is_empty());
}

#[test]
fn invalid_json_is_json_error() {
    let mut output: Vec<u8> = Vec::new();
    let actual = generate_to_writer(
        "{ not json",
        "Instance",
        &mut output,
        &GenerateSettings::default(),
    );
    assert!(matches!(actual, Err(ExampleGenError::JsonError(_))));
}

#[test]
fn unknown_type_writes_nothing() {
    let mut output: Vec<u8> = Vec::new();
    let actual = generate_to_writer(
        DISCOVERY_JSON,
        "Network",
        &mut output,
        &GenerateSettings::default(),
    );
    let error: ExampleGenError = actual.expect_err("Network is not defined");
    assert_eq!("unknown type `Network`", error.to_string());
    assert!(output.is_empty());
}

#[test]
fn deny_recursive_types_reports_cycle() {
    let mut output: Vec<u8> = Vec::new();
    let settings = GenerateSettings {
        deny_recursive_types: true,
    };
    let actual = generate_to_writer(DISCOVERY_JSON, "Instance", &mut output, &settings);
    let error: ExampleGenError = actual.expect_err("Instance contains itself");
    assert_eq!(
        "recursive type `Instance` found within itself (parents: Instance->AttachedDisk)",
        error.to_string()
    );
}
