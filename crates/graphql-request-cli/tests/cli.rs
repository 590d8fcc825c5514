#![allow(unused_crate_dependencies)]

use std::path::PathBuf;

use duct::cmd;
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn renders_a_fixture_file() {
    let output = cmd!(env!("CARGO_BIN_EXE_gqlreq"), fixture("customer.json")).read().unwrap();
    let request: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        request,
        json!({
            "query": "query($id: ID!) { me: customer(id: $id) { id address { city } } orders(last: 3 status: \"OPEN\") { total } }",
            "variables": { "id": "42" },
        })
    );
}

#[test]
fn renders_a_mutation_from_stdin() {
    let output = cmd!(env!("CARGO_BIN_EXE_gqlreq"), "--operation-type", "mutation")
        .stdin_bytes(r#"{ "functionName": "cancelOrder", "params": { "id": 7 }, "fields": ["status"] }"#)
        .read()
        .unwrap();
    let request: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        request,
        json!({
            "query": "mutation { cancelOrder(id: 7) { status } }",
            "variables": {},
        })
    );
}

#[test]
fn empty_request_fails() {
    let output = cmd!(env!("CARGO_BIN_EXE_gqlreq"))
        .stdin_bytes("[]")
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("building the query"), "{stderr}");
    assert!(stderr.contains("the request is empty"), "{stderr}");
}

#[test]
fn invalid_json_fails() {
    let output = cmd!(env!("CARGO_BIN_EXE_gqlreq"))
        .stdin_bytes("not json")
        .stderr_capture()
        .unchecked()
        .run()
        .unwrap();

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("parsing the operation tree"),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
