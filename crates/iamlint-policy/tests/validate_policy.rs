//! Integration tests: the full validation pipeline against documents on disk.
//!
//! Each test writes a policy file into a temporary directory and runs
//! `validate_file` end to end, covering the tri-state outcome model and
//! the pipeline's idempotence on re-serialized input.

use std::io::Write;
use std::path::PathBuf;

use iamlint_policy::{validate_file, validate_value, PolicyError, Verdict};
use serde_json::{json, Value};

fn write_policy(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

fn scoped_policy() -> Value {
    json!({
        "PolicyName": "read-bucket",
        "PolicyDocument": {
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Effect": "Allow",
                    "Action": "s3:GetObject",
                    "Resource": "arn:aws:s3:::bucket/*"
                }
            ]
        }
    })
}

#[test]
fn test_valid_policy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "policy.json", &scoped_policy().to_string());
    assert_eq!(validate_file(&path).unwrap(), Verdict::Valid);
}

#[test]
fn test_wildcard_policy_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut policy = scoped_policy();
    policy["PolicyDocument"]["Statement"][0]["Resource"] = json!("*");
    let path = write_policy(&dir, "policy.json", &policy.to_string());
    assert_eq!(validate_file(&path).unwrap(), Verdict::ValidWithWildcard);
}

#[test]
fn test_nonexistent_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PolicyError::FileNotFound { .. }));
}

#[test]
fn test_wrong_extension_beats_valid_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "policy.txt", &scoped_policy().to_string());
    let err = validate_file(&path).unwrap_err();
    assert!(matches!(err, PolicyError::NotJsonExtension { .. }));
}

#[test]
fn test_malformed_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "policy.json", "{not json");
    let err = validate_file(&path).unwrap_err();
    assert!(matches!(err, PolicyError::MalformedJson { .. }));
}

#[test]
fn test_missing_policy_document_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "policy.json", r#"{"PolicyName": "p"}"#);
    let err = validate_file(&path).unwrap_err();
    assert_eq!(err, PolicyError::MissingPolicyDocument);
}

#[test]
fn test_statement_with_extra_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut policy = scoped_policy();
    policy["PolicyDocument"]["Statement"][0]["Foo"] = json!("bar");
    let path = write_policy(&dir, "policy.json", &policy.to_string());
    let err = validate_file(&path).unwrap_err();
    assert!(matches!(err, PolicyError::DisallowedKey { .. }));
}

#[test]
fn test_wildcard_in_second_statement_detected() {
    let dir = tempfile::tempdir().unwrap();
    let mut policy = scoped_policy();
    policy["PolicyDocument"]["Statement"]
        .as_array_mut()
        .unwrap()
        .push(json!({"Effect": "Allow", "Action": "s3:*", "Resource": "*"}));
    let path = write_policy(&dir, "policy.json", &policy.to_string());
    assert_eq!(validate_file(&path).unwrap(), Verdict::ValidWithWildcard);
}

#[test]
fn test_round_trip_preserves_outcome() {
    // Parse, re-serialize unchanged, reload: the verdict must be identical.
    let dir = tempfile::tempdir().unwrap();
    for policy in [scoped_policy(), {
        let mut p = scoped_policy();
        p["PolicyDocument"]["Statement"][0]["Resource"] = json!("*");
        p
    }] {
        let first_path = write_policy(&dir, "first.json", &policy.to_string());
        let first = validate_file(&first_path).unwrap();

        let reloaded: Value =
            serde_json::from_str(&std::fs::read_to_string(&first_path).unwrap()).unwrap();
        let second_path = write_policy(&dir, "second.json", &reloaded.to_string());
        let second = validate_file(&second_path).unwrap();

        assert_eq!(first, second);
        assert_eq!(validate_value(&reloaded).unwrap(), first);
    }
}

#[test]
fn test_round_trip_preserves_errors() {
    let broken = json!({
        "PolicyName": "p",
        "PolicyDocument": {"Version": "2012-10-17"}
    });
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "broken.json", &broken.to_string());
    let first = validate_file(&path).unwrap_err();

    let reloaded: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let second = validate_value(&reloaded).unwrap_err();

    assert_eq!(first, second);
    assert_eq!(first, PolicyError::MissingStatement);
}
