#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::path::Path;

const TWO_APIS: &str = r#"{
    "zeta": {
        "environments": [{ "name": "dev", "protocol": "http", "host": "localhost", "port": 8080 }],
        "scenarios": [{ "requestMethod": "GET", "contextPath": "/z", "produces": "application/json", "consumes": "application/json", "responseStatus": 200 }]
    },
    "alpha": {
        "environments": [{ "name": "qa", "protocol": "https", "host": "qa.local", "port": 443 }],
        "scenarios": [{ "scenarioNumber": 7, "requestMethod": "post", "contextPath": "/a", "produces": "text/xml", "consumes": "text/xml", "responseStatus": 201, "hasRequestBody": true }]
    }
}"#;

#[test]
fn test_json_document_keeps_api_order() {
    let config = parse_test_config(TWO_APIS.as_bytes(), DocumentFormat::Json).unwrap();
    let names: Vec<&str> = config.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert_eq!(config.scenario_count(), 2);
    assert_eq!(config.environment_count(), 2);
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = parse_test_config(TWO_APIS.as_bytes(), DocumentFormat::Json).unwrap();
    let zeta = &config.get("zeta").unwrap().scenarios[0];
    assert_eq!(zeta.scenario_number, 0);
    assert!(!zeta.has_request_body);
    assert!(!zeta.has_response_body);

    let alpha = &config.get("alpha").unwrap().scenarios[0];
    assert_eq!(alpha.scenario_number, 7);
    assert_eq!(alpha.request_method, "post");
    assert!(alpha.has_request_body);
}

#[test]
fn test_yaml_document() {
    let yaml = r#"
orders:
  environments:
    - name: dev
      protocol: http
      host: localhost
      port: 9000
  scenarios:
    - requestMethod: DELETE
      contextPath: /orders/1
      produces: text/plain
      consumes: text/plain
      responseStatus: 204
"#;
    let config = parse_test_config(yaml.as_bytes(), DocumentFormat::Yaml).unwrap();
    let orders = config.get("orders").unwrap();
    assert_eq!(orders.environments[0].port, 9000);
    assert_eq!(orders.scenarios[0].response_status, 204);
}

#[test]
fn test_malformed_document_is_an_error() {
    assert!(parse_test_config(b"{ not json", DocumentFormat::Json).is_err());
    assert!(parse_test_config(br#"{"api": {"scenarios": 3}}"#, DocumentFormat::Json).is_err());
}

#[test]
fn test_serialize_round_trips_order() {
    let config = parse_test_config(TWO_APIS.as_bytes(), DocumentFormat::Json).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.find("\"zeta\"").unwrap() < json.find("\"alpha\"").unwrap());
    assert!(json.contains("\"requestMethod\":\"GET\""));
}

#[test]
fn test_insert_replaces_in_place() {
    let mut config = TestConfig::new();
    config.insert("a", Api::default());
    config.insert("b", Api::default());
    config.insert(
        "a",
        Api {
            scenarios: vec![Scenario::default()],
            environments: vec![],
        },
    );
    let names: Vec<&str> = config.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(config.get("a").unwrap().scenarios.len(), 1);
}

#[test]
fn test_document_format_from_path() {
    assert_eq!(DocumentFormat::from_path(Path::new("t.yml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("t.YAML")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("t.json")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_path(Path::new("tests")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::Yaml.extension(), "yaml");
}

#[test]
fn test_load_keeps_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tests.json");
    std::fs::write(&path, TWO_APIS).unwrap();
    let doc = load_test_config(&path).unwrap();
    assert_eq!(doc.raw, TWO_APIS.as_bytes());
    assert_eq!(doc.format, DocumentFormat::Json);
    assert_eq!(doc.config.len(), 2);
}

#[test]
fn test_load_missing_file_mentions_path() {
    let err = load_test_config(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.json"));
}
