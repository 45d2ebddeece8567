use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorField,
}

#[derive(Debug, Deserialize)]
pub struct ErrorField {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Best effort: `None` when the body is not the service's error envelope.
    pub fn parse(body: &str) -> Option<ErrorResponse> {
        serde_json::from_str(body).ok()
    }
}
