//! Error types and response classification for the API client
//!
//! Every failed HTTP exchange anywhere in the library funnels through
//! [`classify_response`], so callers always see the same structured error
//! regardless of which resource or operation triggered it.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Substituted when a failed response body cannot be read at all.
const UNREADABLE_BODY: &str = "An error occurred reading the response";

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: no response was received
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx response
    #[error("{0}")]
    Api(ApiResponseError),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API token was provided
    #[error("No API token provided")]
    MissingApiToken,

    /// Unrecognized region selector
    #[error("Unknown region {0}")]
    UnknownRegion(String),

    /// Other configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Webhook signature did not match the payload
    #[error("Invalid signature for webhook event")]
    InvalidSignature,

    /// Crypto support is not compiled in, so webhooks cannot be verified
    #[error("Verifying webhook events requires crypto support")]
    CryptoUnsupported,
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is an API error with a client (4xx) status code
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_client_error())
    }

    /// Check if this is an API error with a server (5xx) status code
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api(api) if !api.is_client_error())
    }
}

impl From<idcheck_crypto::CryptoError> for ApiError {
    fn from(err: idcheck_crypto::CryptoError) -> Self {
        match err {
            idcheck_crypto::CryptoError::Unsupported => Self::CryptoUnsupported,
            _ => Self::InvalidSignature,
        }
    }
}

/// Structured error produced from a non-2xx API response
#[derive(Debug, Clone)]
pub struct ApiResponseError {
    /// Composite message: `"<message> (status code <code>)"`, with field
    /// errors appended when present
    pub message: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Machine-readable error type reported by the API
    pub error_type: String,
    /// Field-level validation errors, when the API reported any
    pub fields: Option<Value>,
    /// The raw response body the error was built from
    pub response_body: Value,
}

impl ApiResponseError {
    /// Build a classified error from a decoded response body and status.
    ///
    /// The body is expected to look like
    /// `{"error": {"type": ..., "message": ..., "fields": ...}}`; anything
    /// else falls back to type `"unknown"` with the stringified body as the
    /// message.
    #[must_use]
    pub fn from_body(body: Value, status: u16) -> Self {
        let inner = body.get("error").and_then(Value::as_object);

        let error_type = inner
            .and_then(|e| e.get("type"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        let message = inner
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| stringify_body(&body), ToString::to_string);

        let fields = inner.and_then(|e| e.get("fields")).cloned();

        let mut full_message = format!("{message} (status code {status})");
        if let Some(ref fields) = fields {
            full_message.push_str(&format!(" | {fields}"));
        }

        Self {
            message: full_message,
            status,
            error_type,
            fields,
            response_body: body,
        }
    }

    /// Whether the response carried a client (4xx) status code.
    ///
    /// Callers typically branch on this to decide retry policy; the library
    /// itself never retries.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status < 500
    }
}

impl fmt::Display for ApiResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Render a response body the way it would appear interpolated in a string:
/// bare strings lose their quotes, everything else is JSON.
fn stringify_body(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Translate a non-2xx response into a classified [`ApiError`].
///
/// The body is fully drained and decoded as text (streamed download
/// failures arrive this way too), parsed as JSON when possible and kept as
/// raw text otherwise. A body that cannot be read resolves to a fixed
/// placeholder rather than propagating a second failure, so classification
/// always completes.
pub(crate) async fn classify_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    ApiError::Api(ApiResponseError::from_body(body, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_with_fields() {
        let body = json!({
            "error": {
                "type": "validation_error",
                "message": "Invalid",
                "fields": { "first_name": ["is required"] }
            }
        });

        let error = ApiResponseError::from_body(body, 422);
        assert_eq!(error.error_type, "validation_error");
        assert_eq!(
            error.message,
            r#"Invalid (status code 422) | {"first_name":["is required"]}"#
        );
        assert!(error.is_client_error());
    }

    #[test]
    fn test_unparseable_body() {
        let error = ApiResponseError::from_body(Value::String("oops".into()), 503);
        assert_eq!(error.error_type, "unknown");
        assert_eq!(error.message, "oops (status code 503)");
        assert!(!error.is_client_error());
        assert!(error.fields.is_none());
    }

    #[test]
    fn test_json_body_without_error_object() {
        let body = json!({ "status": "failed" });
        let error = ApiResponseError::from_body(body, 400);
        assert_eq!(error.error_type, "unknown");
        assert_eq!(error.message, r#"{"status":"failed"} (status code 400)"#);
    }

    #[test]
    fn test_client_server_split() {
        let client = ApiError::Api(ApiResponseError::from_body(Value::Null, 404));
        assert!(client.is_client_error());
        assert!(!client.is_server_error());

        let server = ApiError::Api(ApiResponseError::from_body(Value::Null, 500));
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
    }

    #[test]
    fn test_crypto_error_mapping() {
        let err: ApiError = idcheck_crypto::CryptoError::Unsupported.into();
        assert!(matches!(err, ApiError::CryptoUnsupported));

        let err: ApiError = idcheck_crypto::CryptoError::SignatureMismatch.into();
        assert!(matches!(err, ApiError::InvalidSignature));
    }
}
