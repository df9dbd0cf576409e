use serde::Serialize;

/// Domains served by the v2 client package. Everything else, including
/// domains the generator has never heard of, resolves to v1.
const V2_DOMAINS: &[&str] = &[
    "metrics",
    "logs",
    "spans",
    "rum",
    "security",
    "incidents",
    "users",
];

/// Which Datadog client package the generated imports name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientVersion {
    V1,
    V2,
}

impl ClientVersion {
    pub fn for_domain(domain: &str) -> Self {
        if V2_DOMAINS.contains(&domain) {
            ClientVersion::V2
        } else {
            ClientVersion::V1
        }
    }

    /// Go package name emitted in the import block.
    pub fn package(self) -> &'static str {
        match self {
            ClientVersion::V1 => "datadogV1",
            ClientVersion::V2 => "datadogV2",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClientVersion::V1 => "v1",
            ClientVersion::V2 => "v2",
        }
    }
}
