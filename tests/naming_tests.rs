use ddsnip::{GenerationRequest, camel_case, entry_point_name, generate};

#[test]
fn test_camel_case_rule() {
    assert_eq!(camel_case("do-thing_unknown-domain"), "doThingUnknownDomain");
    assert_eq!(camel_case("query_metrics"), "queryMetrics");
    assert_eq!(camel_case("already"), "already");
    assert_eq!(camel_case(""), "");
    // The first letter is never touched.
    assert_eq!(camel_case("a-b-c"), "aBC");
}

#[test]
fn test_mapped_pairs_use_canonical_names() {
    assert_eq!(entry_point_name("metrics", "query"), "queryMetrics");
    assert_eq!(entry_point_name("monitors", "create"), "createMonitor");
    assert_eq!(entry_point_name("infrastructure", "hosts"), "listHosts");
    assert_eq!(entry_point_name("slos", "list"), "listSLOs");
}

#[test]
fn test_unmapped_pairs_synthesize_names() {
    assert_eq!(entry_point_name("unknown-domain", "do-thing"), "doThingUnknownDomain");
    assert_eq!(entry_point_name("widgets", "rotate"), "rotateWidgets");
}

/// The name the stub defines and the name the wrapper calls must be the same
/// identifier for every unmapped pair.
#[test]
fn test_stub_and_wrapper_names_agree() {
    let cases = [
        ("unknown-domain", "do-thing"),
        ("widgets", "rotate"),
        ("a_b", "c-d"),
        ("metrics", "explode"),
    ];

    for (domain, operation) in cases {
        let snippet = generate(&GenerationRequest::new(domain, operation));
        let name = entry_point_name(domain, operation);

        assert!(
            snippet.code.contains(&format!("func {}(ctx context.Context", name)),
            "{domain}-{operation}: body does not define {name}"
        );
        assert!(
            snippet.code.contains(&format!("if err := {}(ctx, apiClient); err != nil {{", name)),
            "{domain}-{operation}: wrapper does not call {name}"
        );
        assert_eq!(snippet.entry_point, name);
    }
}
