mod go;
mod output;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::naming;
use crate::request::GenerationRequest;
use crate::version::ClientVersion;

/// A generated Go program plus the metadata the CLI's `--json` mode exposes.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    /// Complete program text.
    pub code: String,
    /// Name of the function `main` invokes.
    pub entry_point: String,
    /// Client package the import block names.
    pub client_version: ClientVersion,
}

/// A builder for one operation's function body.
type BodyBuilder = fn(&Map<String, Value>) -> String;

/// How a domain dispatches on the operation name.
enum DomainTemplates {
    /// One canonical body; the operation value is ignored entirely.
    Single(BodyBuilder),
    /// Per-operation bodies; unmatched operations fall to the generic stub.
    ByOperation(&'static [(&'static str, BodyBuilder)]),
}

/// The closed dispatch registry. Domains not listed here, and unmatched
/// operations within `ByOperation` domains, produce the generic stub.
static REGISTRY: &[(&str, DomainTemplates)] = &[
    (
        "metrics",
        DomainTemplates::ByOperation(&[
            ("query", go::metrics_query),
            ("list", go::metrics_list),
            ("submit", go::metrics_submit),
        ]),
    ),
    (
        "monitors",
        DomainTemplates::ByOperation(&[
            ("list", go::monitors_list),
            ("get", go::monitors_get),
            ("create", go::monitors_create),
        ]),
    ),
    (
        "dashboards",
        DomainTemplates::ByOperation(&[
            ("list", go::dashboards_list),
            ("create", go::dashboards_create),
        ]),
    ),
    ("logs", DomainTemplates::Single(go::logs_search)),
    ("traces", DomainTemplates::Single(go::traces_list)),
    ("slos", DomainTemplates::Single(go::slos_list)),
    ("incidents", DomainTemplates::Single(go::incidents_list)),
    ("synthetics", DomainTemplates::Single(go::synthetics_list)),
    ("rum", DomainTemplates::Single(go::rum_search)),
    ("security", DomainTemplates::Single(go::security_list)),
    ("infrastructure", DomainTemplates::Single(go::infrastructure_hosts)),
    ("admin", DomainTemplates::Single(go::admin_users)),
];

fn operation_body(domain: &str, operation: &str, params: &Map<String, Value>) -> String {
    match REGISTRY.iter().find(|(name, _)| *name == domain) {
        Some((_, DomainTemplates::Single(build))) => build(params),
        Some((_, DomainTemplates::ByOperation(operations))) => operations
            .iter()
            .find(|(name, _)| *name == operation)
            .map(|(_, build)| build(params))
            .unwrap_or_else(|| go::generic_stub(domain, operation, params)),
        None => go::generic_stub(domain, operation, params),
    }
}

/// Generate a complete Go program for the request.
///
/// Total over its input: every `(domain, operation, params)` combination
/// produces a program, with the generic stub as the floor. Deterministic and
/// stateless, so concurrent calls are independent.
pub fn generate(request: &GenerationRequest) -> Snippet {
    let client_version = ClientVersion::for_domain(&request.domain);
    let entry_point = naming::entry_point_name(&request.domain, &request.operation);

    let blocks = [
        "package main".to_string(),
        go::import_block(client_version),
        operation_body(&request.domain, &request.operation, &request.params),
        go::entry_point(&entry_point),
        go::error_helper(),
    ];

    let mut code = blocks.join("\n\n");
    code.push('\n');

    Snippet {
        code,
        entry_point,
        client_version,
    }
}
