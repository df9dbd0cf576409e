use ddsnip::{ClientVersion, GenerationRequest, generate};
use serde_json::json;

fn request(domain: &str, operation: &str, params: serde_json::Value) -> GenerationRequest {
    let mut request = GenerationRequest::new(domain, operation);
    if let serde_json::Value::Object(map) = params {
        request.params = map;
    }
    request
}

/// Every supported pair produces exactly one package clause, one import
/// block, one main, and one error helper.
#[test]
fn test_program_structure() {
    let pairs = [
        ("metrics", "query"),
        ("metrics", "list"),
        ("metrics", "submit"),
        ("monitors", "list"),
        ("monitors", "get"),
        ("monitors", "create"),
        ("dashboards", "list"),
        ("dashboards", "create"),
        ("logs", "search"),
        ("traces", "list"),
        ("slos", "list"),
        ("incidents", "list"),
        ("synthetics", "list"),
        ("rum", "search"),
        ("security", "list"),
        ("infrastructure", "hosts"),
        ("admin", "users"),
    ];

    for (domain, operation) in pairs {
        let code = generate(&request(domain, operation, json!({}))).code;

        assert!(!code.is_empty());
        assert_eq!(code.matches("package main").count(), 1, "{domain}-{operation}");
        assert_eq!(code.matches("import (").count(), 1, "{domain}-{operation}");
        assert_eq!(code.matches("func main() {").count(), 1, "{domain}-{operation}");
        assert_eq!(
            code.matches("func handleAPIError").count(),
            1,
            "{domain}-{operation}"
        );
    }
}

#[test]
fn test_v2_domains_import_v2_client() {
    // "spans" and "users" are in the v2 set even though only the generic
    // stub serves them; the import block still follows the version table.
    for domain in ["metrics", "logs", "rum", "security", "incidents", "spans", "users"] {
        let snippet = generate(&request(domain, "query", json!({})));
        assert_eq!(snippet.client_version, ClientVersion::V2);
        assert!(snippet.code.contains("api/datadogV2\""), "{domain}");
        assert!(!snippet.code.contains("api/datadogV1\""), "{domain}");
    }
}

#[test]
fn test_other_domains_import_v1_client() {
    for domain in ["monitors", "dashboards", "traces", "synthetics", "infrastructure", "admin", "nope"] {
        let snippet = generate(&request(domain, "list", json!({})));
        assert_eq!(snippet.client_version, ClientVersion::V1);
        assert!(snippet.code.contains("api/datadogV1\""), "{domain}");
        assert!(!snippet.code.contains("api/datadogV2\""), "{domain}");
    }
}

#[test]
fn test_metrics_query_example_scenario() {
    let code = generate(&request(
        "metrics",
        "query",
        json!({"query": "avg:system.cpu.user{*}"}),
    ))
    .code;

    assert!(code.contains("func queryMetrics(ctx context.Context, apiClient *datadog.APIClient) error {"));
    assert!(code.contains("Query: \"avg:system.cpu.user{*}\","));
    assert!(code.contains("if err := queryMetrics(ctx, apiClient); err != nil {"));
    assert!(code.contains("api/datadogV2\""));
}

#[test]
fn test_number_default_and_override() {
    let default = generate(&request("logs", "search", json!({}))).code;
    assert!(default.contains("Limit: datadog.PtrInt32(25),"));

    let overridden = generate(&request("logs", "search", json!({"limit": 10}))).code;
    assert!(overridden.contains("Limit: datadog.PtrInt32(10),"));
    assert!(!overridden.contains("PtrInt32(25)"));
}

#[test]
fn test_hosts_filter_line_is_conditional() {
    let without = generate(&request("infrastructure", "hosts", json!({}))).code;
    assert!(!without.contains("WithFilter"));
    assert!(without.contains("WithCount(100)"));

    let with = generate(&request("infrastructure", "hosts", json!({"filter": "foo"}))).code;
    assert!(with.contains("opts = opts.WithFilter(\"foo\")"));
}

#[test]
fn test_monitor_threshold_override_leaves_other_defaults() {
    let code = generate(&request("monitors", "create", json!({"threshold": 95}))).code;

    assert!(code.contains("Critical: datadog.PtrFloat64(95),"));
    assert!(code.contains("Query: \"avg(last_5m):avg:system.cpu.user{*} > 90\","));
    assert!(code.contains("Name: datadog.PtrString(\"Example monitor\"),"));
}

#[test]
fn test_tag_list_default_and_override() {
    let default = generate(&request("metrics", "submit", json!({}))).code;
    assert!(default.contains("Tags: []string{\"env:example\"},"));

    let overridden = generate(&request(
        "metrics",
        "submit",
        json!({"tags": ["env:prod", "team:core"]}),
    ))
    .code;
    assert!(overridden.contains("Tags: []string{\"env:prod\", \"team:core\"},"));
}

#[test]
fn test_values_interpolated_as_is() {
    // A number handed to a string-typed slot renders bare; no validation.
    let code = generate(&request("metrics", "query", json!({"query": 42}))).code;
    assert!(code.contains("Query: 42,"));
}

#[test]
fn test_unknown_pair_emits_generic_stub() {
    let snippet = generate(&request("unknown-domain", "do-thing", json!({})));

    assert_eq!(snippet.entry_point, "doThingUnknownDomain");
    assert!(snippet.code.contains("func doThingUnknownDomain(ctx context.Context, apiClient *datadog.APIClient) error {"));
    assert!(snippet.code.contains("if err := doThingUnknownDomain(ctx, apiClient); err != nil {"));
    assert!(snippet.code.contains("// params: {}"));
    assert!(snippet.code.contains("_ = apiClient"));
}

#[test]
fn test_unmatched_operation_in_dispatch_domain_falls_back() {
    let snippet = generate(&request("metrics", "explode", json!({"a": 1})));

    assert_eq!(snippet.entry_point, "explodeMetrics");
    assert!(snippet.code.contains("func explodeMetrics("));
    assert!(snippet.code.contains("// params: {\"a\":1}"));
    // The unknown operation still picks up the domain's v2 import block.
    assert!(snippet.code.contains("api/datadogV2\""));
}

#[test]
fn test_single_operation_domains_ignore_operation_value() {
    let canonical = generate(&request("logs", "search", json!({}))).code;
    let odd = generate(&request("logs", "frobnicate", json!({}))).code;

    // Same body either way; only the wrapper's callable name differs.
    assert!(odd.contains("func searchLogs("));
    assert!(canonical.contains("func searchLogs("));
}

/// The generator is total: strange parameter shapes never panic.
#[test]
fn test_totality_over_odd_inputs() {
    let odd_params = [
        json!({}),
        json!({"query": null}),
        json!({"limit": "ten"}),
        json!({"tags": "solo"}),
        json!({"tags": [1, 2, 3]}),
        json!({"nested": {"deep": [true, null]}}),
        json!({"query": "line\nbreak and \"quotes\""}),
    ];

    for params in odd_params {
        for domain in ["metrics", "logs", "infrastructure", "", "???"] {
            let snippet = generate(&request(domain, "query", params.clone()));
            assert!(!snippet.code.is_empty());
        }
    }
}

#[test]
fn test_null_param_falls_back_to_default() {
    let code = generate(&request("logs", "search", json!({"limit": null}))).code;
    assert!(code.contains("Limit: datadog.PtrInt32(25),"));
}

#[test]
fn test_generation_is_deterministic() {
    let req = request("metrics", "submit", json!({"value": 7, "tags": ["a"]}));
    assert_eq!(generate(&req).code, generate(&req).code);
}

#[test]
fn test_request_from_json_defaults_params() {
    let request =
        GenerationRequest::from_json(r#"{"domain": "metrics", "operation": "query"}"#).unwrap();
    assert!(request.params.is_empty());
    assert_eq!(request.domain, "metrics");

    assert!(GenerationRequest::from_json("not json").is_err());
}
