/// Canonical Go function identifiers for the operations that have a
/// dedicated template, keyed by `"{domain}-{operation}"`.
const OPERATION_NAMES: &[(&str, &str)] = &[
    ("metrics-query", "queryMetrics"),
    ("metrics-list", "listMetrics"),
    ("metrics-submit", "submitMetrics"),
    ("monitors-list", "listMonitors"),
    ("monitors-get", "getMonitor"),
    ("monitors-create", "createMonitor"),
    ("dashboards-list", "listDashboards"),
    ("dashboards-create", "createDashboard"),
    ("logs-search", "searchLogs"),
    ("traces-list", "listSpans"),
    ("slos-list", "listSLOs"),
    ("incidents-list", "listIncidents"),
    ("synthetics-list", "listSyntheticsTests"),
    ("rum-search", "searchRumEvents"),
    ("security-list", "listSecuritySignals"),
    ("infrastructure-hosts", "listHosts"),
    ("admin-users", "listUsers"),
];

/// camelCase a hyphen/underscore-joined phrase: uppercase the letter
/// following each separator, drop the separator, leave the first letter
/// untouched.
pub fn camel_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut upper_next = false;
    for ch in phrase.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Synthesized identifier for a `(domain, operation)` pair with no entry in
/// the name table. The generic stub and the entry-point wrapper both name
/// their function through this routine, so the two can never disagree.
pub fn fallback_entry_point(domain: &str, operation: &str) -> String {
    camel_case(&format!("{operation}_{domain}"))
}

/// Resolve the identifier the generated `main` calls.
pub fn entry_point_name(domain: &str, operation: &str) -> String {
    let key = format!("{domain}-{operation}");
    OPERATION_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| fallback_entry_point(domain, operation))
}
