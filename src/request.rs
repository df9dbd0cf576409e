use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RequestError;

/// One generation request: a domain, an operation, and an open parameter
/// bag. Both name fields are free-form; unknown values fall through to the
/// generic stub rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub domain: String,
    pub operation: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl GenerationRequest {
    pub fn new(domain: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            operation: operation.into(),
            params: Map::new(),
        }
    }

    /// Parse a request from its JSON representation.
    pub fn from_json(source: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Build a request from CLI flags; `params` is an optional JSON object.
    pub fn from_parts(
        domain: &str,
        operation: &str,
        params: Option<&str>,
    ) -> Result<Self, RequestError> {
        let mut request = Self::new(domain, operation);
        if let Some(text) = params {
            match serde_json::from_str(text)? {
                Value::Object(map) => request.params = map,
                _ => return Err(RequestError::ParamsNotObject),
            }
        }
        Ok(request)
    }
}
