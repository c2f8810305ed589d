mod common;

use shade_config::InvocationPolicy;
use shade_driver::{LoweringRequest, lower_file, lower_request};

use common::{quiet_config, request_json, write_request};

const GOTO: &str = r#"{ "category": "statement", "kind": "goto", "target": { "label": "end" }, "span": { "start": 30, "end": 39 } }"#;

const LOAD: &str = r#"{ "category": "statement", "kind": "expression", "expression": 8 },
    { "category": "expression", "kind": "identifier", "name": "Diffuse" },
    { "category": "expression", "kind": "member_reference", "target": 6, "member_name": "Load" },
    { "category": "expression", "kind": "invocation", "target": 7, "arguments": [1] }"#;

fn with_load_bindings(json: String) -> String {
  json.replace(
    r#""bindings": {"#,
    r#""bindings": {
    "6": { "kind": "member", "declaring_type": "Blur", "member_name": "Diffuse", "member_type": "texture2d" },
    "8": { "kind": "member", "declaring_type": "texture2d", "member_name": "Load", "member_type": "float4" },"#,
  )
}

#[test]
fn clean_request_succeeds() {
  let temp = tempfile::tempdir().unwrap();
  let path = write_request(temp.path(), &request_json(None));

  assert_eq!(lower_file(quiet_config(InvocationPolicy::Fatal), &path), Ok(()));
}

#[test]
fn unsupported_statement_fails_the_file() {
  let temp = tempfile::tempdir().unwrap();
  let path = write_request(temp.path(), &request_json(Some(GOTO)));

  assert_eq!(lower_file(quiet_config(InvocationPolicy::Fatal), &path), Err(()));
}

#[test]
fn goto_is_reported_at_its_span_and_the_rest_survives() {
  let request = LoweringRequest::from_json(&request_json(Some(GOTO))).unwrap();
  let summary = lower_request(&quiet_config(InvocationPolicy::Fatal), &request);

  let main = summary.method("Main").unwrap();
  assert!(main.fatal.is_none());
  assert_eq!(main.diagnostics.len(), 1);
  assert_eq!(main.diagnostics[0].feature(), Some("goto"));
  assert_eq!(main.diagnostics[0].primary_span().start.0, 30);

  // Block plus the surviving assignment.
  assert_eq!(main.body.as_ref().map(|body| body.count()), Some(2));
}

#[test]
fn missing_file_fails() {
  let temp = tempfile::tempdir().unwrap();
  let path = temp.path().join("absent.json");

  assert_eq!(
    lower_file(quiet_config(InvocationPolicy::Fatal), &path.to_string_lossy()),
    Err(())
  );
}

#[test]
fn malformed_request_fails() {
  let temp = tempfile::tempdir().unwrap();
  let path = write_request(temp.path(), "{ \"effect\": [");

  assert_eq!(lower_file(quiet_config(InvocationPolicy::Fatal), &path), Err(()));
}

#[test]
fn unsupported_invocation_follows_the_policy() {
  let request = LoweringRequest::from_json(&with_load_bindings(request_json(Some(LOAD)))).unwrap();

  let fatal = lower_request(&quiet_config(InvocationPolicy::Fatal), &request);
  let main = fatal.method("Main").unwrap();
  assert!(main.fatal.is_some());
  assert!(main.body.is_none());
  assert_eq!(fatal.fatal_count(), 1);

  let reported = lower_request(&quiet_config(InvocationPolicy::Diagnostic), &request);
  let main = reported.method("Main").unwrap();
  assert!(main.fatal.is_none());
  assert_eq!(
    main.diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
    vec!["Cannot call 'texture2d.Load' with 1 argument in shader code"]
  );
  assert_eq!(reported.fatal_count(), 0);
}
