#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::model::{Api, Environment, Scenario, TestConfig};

fn env(name: &str) -> Environment {
    Environment {
        name: name.to_string(),
        protocol: "http".to_string(),
        host: "localhost".to_string(),
        port: 8080,
    }
}

fn scenario(number: i64, method: &str) -> Scenario {
    Scenario {
        scenario_number: number,
        request_method: method.to_string(),
        context_path: "/pets".to_string(),
        produces: "application/json".to_string(),
        consumes: "application/json".to_string(),
        response_status: 200,
        has_request_body: false,
        has_response_body: true,
    }
}

fn single_api(name: &str, api: Api) -> TestConfig {
    let mut config = TestConfig::new();
    config.insert(name, api);
    config
}

fn kinds(report: &ValidationReport) -> Vec<ViolationKind> {
    report.violations.iter().map(|v| v.kind).collect()
}

#[test]
fn test_valid_config_has_no_violations_and_same_shape() {
    let mut config = TestConfig::new();
    config.insert(
        "pets",
        Api {
            scenarios: vec![scenario(0, "GET"), scenario(0, "post")],
            environments: vec![env("dev"), env("qa")],
        },
    );
    config.insert(
        "Orders2",
        Api {
            scenarios: vec![scenario(5, "DELETE")],
            environments: vec![env("dev")],
        },
    );

    let report = validate(&config);
    assert!(report.is_valid(), "{:?}", report.messages());
    assert_eq!(report.config.len(), config.len());
    assert_eq!(report.config.scenario_count(), config.scenario_count());
    assert_eq!(report.config.environment_count(), config.environment_count());
}

#[test]
fn test_default_numbering_in_declaration_order() {
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(0, "GET"), scenario(0, "GET"), scenario(0, "GET")],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    let numbers: Vec<i64> = report.config.get("pets").unwrap().scenarios.iter().map(|s| s.scenario_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_default_numbering_does_not_mutate_input() {
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(0, "GET")],
            environments: vec![env("dev")],
        },
    );
    let _report = validate(&config);
    assert_eq!(config.get("pets").unwrap().scenarios[0].scenario_number, 0);
}

#[test]
fn test_mixed_numbering_keeps_explicit_values_even_when_duplicated() {
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(0, "GET"), scenario(1, "GET"), scenario(0, "GET"), scenario(9, "GET")],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    let numbers: Vec<i64> = report.config.get("pets").unwrap().scenarios.iter().map(|s| s.scenario_number).collect();
    assert_eq!(numbers, vec![1, 1, 2, 9]);
    assert!(report.is_valid());
}

#[test]
fn test_numbering_is_scoped_per_api() {
    let mut config = TestConfig::new();
    for name in ["a", "b"] {
        config.insert(
            name,
            Api {
                scenarios: vec![scenario(0, "GET"), scenario(0, "GET")],
                environments: vec![env("dev")],
            },
        );
    }
    let report = validate(&config);
    for name in ["a", "b"] {
        let numbers: Vec<i64> = report.config.get(name).unwrap().scenarios.iter().map(|s| s.scenario_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}

#[test]
fn test_api_name_with_dash_rejected() {
    let config = single_api(
        "api-1",
        Api {
            scenarios: vec![scenario(1, "GET")],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(kinds(&report), vec![ViolationKind::ApiName]);
    assert!(report.violations[0].message.contains("api-1"));
}

#[test]
fn test_get_with_body_yields_exactly_one_violation() {
    let mut get = scenario(3, "get");
    get.has_request_body = true;
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![get],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(kinds(&report), vec![ViolationKind::GetWithBody]);
    assert!(report.violations[0].message.contains('3'));
    assert_eq!(report.violations[0].location, "pets/scenario:3");
}

#[test]
fn test_post_with_body_is_fine() {
    let mut post = scenario(1, "POST");
    post.has_request_body = true;
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![post],
            environments: vec![env("dev")],
        },
    );
    assert!(validate(&config).is_valid());
}

#[test]
fn test_empty_api_reports_missing_environments_and_scenarios() {
    let config = single_api("empty", Api::default());
    let report = validate(&config);
    assert_eq!(
        kinds(&report),
        vec![ViolationKind::MissingEnvironments, ViolationKind::MissingScenarios]
    );
}

#[test]
fn test_environment_rules_all_reported() {
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(1, "GET")],
            environments: vec![Environment {
                name: " ".to_string(),
                protocol: String::new(),
                host: String::new(),
                port: -1,
            }],
        },
    );
    let report = validate(&config);
    assert_eq!(
        kinds(&report),
        vec![
            ViolationKind::EnvironmentName,
            ViolationKind::EnvironmentProtocol,
            ViolationKind::EnvironmentHost,
            ViolationKind::EnvironmentPort,
        ]
    );
    assert!(report.violations[3].message.contains("-1"));
}

#[test]
fn test_port_zero_is_valid() {
    let mut dev = env("dev");
    dev.port = 0;
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(1, "GET")],
            environments: vec![dev],
        },
    );
    assert!(validate(&config).is_valid());
}

#[test]
fn test_scenario_rules_all_reported_with_assigned_number() {
    let broken = Scenario {
        scenario_number: 0,
        request_method: "FETCH".to_string(),
        context_path: "pets".to_string(),
        produces: String::new(),
        consumes: "  ".to_string(),
        response_status: 200,
        has_request_body: false,
        has_response_body: false,
    };
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![broken],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(
        kinds(&report),
        vec![
            ViolationKind::RequestMethod,
            ViolationKind::ContextPath,
            ViolationKind::Produces,
            ViolationKind::Consumes,
        ]
    );
    assert!(report.violations.iter().all(|v| v.message.ends_with("ScenarioNumber: 1")));
}

#[test]
fn test_blank_method_and_path_report_once_each() {
    let mut blank = scenario(1, "");
    blank.context_path = String::new();
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![blank],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(kinds(&report), vec![ViolationKind::RequestMethod, ViolationKind::ContextPath]);
    assert!(report.violations[0].message.contains("blank"));
    assert!(report.violations[1].message.contains("blank"));
}

#[test]
fn test_response_status_check_is_inert() {
    for status in [-5, 0, 99, 100, 599, 600, 1000] {
        assert!(!response_status_rejected(status), "status {status}");
    }
    let mut odd = scenario(1, "GET");
    odd.response_status = 42;
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![odd],
            environments: vec![env("dev")],
        },
    );
    assert!(validate(&config).is_valid());
}

#[test]
fn test_violations_collected_across_apis() {
    let mut config = TestConfig::new();
    config.insert("bad-one", Api::default());
    config.insert(
        "good",
        Api {
            scenarios: vec![scenario(1, "TRACE")],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(report.violations.len(), 4);
    assert_eq!(report.violations[3].location, "good/scenario:1");
}

#[test]
fn test_violation_display_includes_location() {
    let v = Violation::new("pets/env:dev", ViolationKind::EnvironmentHost, "Environment host cannot be blank");
    assert_eq!(v.to_string(), "[pets/env:dev] Environment host cannot be blank");
    assert_eq!(ViolationKind::GetWithBody.to_string(), "get_with_body");
}

#[test]
fn test_environment_name_cannot_leave_its_directory() {
    for name in ["../../../../escaped", "a/b", "a\\b", "..", "dev..qa"] {
        let config = single_api(
            "pets",
            Api {
                scenarios: vec![scenario(1, "GET")],
                environments: vec![env(name)],
            },
        );
        let report = validate(&config);
        assert_eq!(kinds(&report), vec![ViolationKind::EnvironmentName], "{name}");
        assert!(report.violations[0].message.contains(name));
    }
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(1, "GET")],
            environments: vec![env("pre-prod.eu_1")],
        },
    );
    assert!(validate(&config).is_valid());
}

#[test]
fn test_padded_method_is_rejected() {
    let config = single_api(
        "pets",
        Api {
            scenarios: vec![scenario(1, " get ")],
            environments: vec![env("dev")],
        },
    );
    let report = validate(&config);
    assert_eq!(kinds(&report), vec![ViolationKind::RequestMethod]);
    assert!(report.violations[0].message.contains("must be one of"));
}
