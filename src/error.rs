use std::fmt;

/// Error while turning CLI or file input into a [`crate::GenerationRequest`].
///
/// Generation itself is total and has no error path; only the request
/// boundary can fail.
#[derive(Debug)]
pub enum RequestError {
    /// The request text was not valid JSON or did not match the schema.
    Json(serde_json::Error),
    /// `--params` was valid JSON but not a JSON object.
    ParamsNotObject,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Json(err) => write!(f, "invalid request: {}", err),
            RequestError::ParamsNotObject => write!(f, "params must be a JSON object"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Json(err) => Some(err),
            RequestError::ParamsNotObject => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Json(err)
    }
}
