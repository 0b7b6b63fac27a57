//! Webhook event signature verification
//!
//! The API signs each webhook delivery with HMAC-SHA256 over the raw
//! request body, using the webhook's signing token as the key, and sends
//! the hex-encoded signature in a request header. This layer does not
//! enforce the header name; the caller passes the header value in.

use crate::casing;
use crate::error::{ApiError, ApiResult};
use serde_json::Value;

/// Verifies webhook event signatures and extracts their payloads.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    webhook_token: String,
}

impl WebhookVerifier {
    /// Create a verifier for the given webhook signing token.
    pub fn new(webhook_token: impl Into<String>) -> Self {
        Self {
            webhook_token: webhook_token.into(),
        }
    }

    /// Verify an event's signature and return its payload.
    ///
    /// Computes the HMAC-SHA256 of `raw_event_body` and compares it in
    /// constant time against the decoded `hex_signature`. On a match the
    /// body is parsed as JSON and the nested `payload` field is returned
    /// with camelCase keys.
    ///
    /// # Errors
    /// - [`ApiError::CryptoUnsupported`] when crypto support is not
    ///   compiled in (checked here, not at construction)
    /// - [`ApiError::InvalidSignature`] on any mismatch or undecodable
    ///   signature
    /// - [`ApiError::Json`] when a correctly signed body is not valid JSON
    pub fn read_payload(&self, raw_event_body: &[u8], hex_signature: &str) -> ApiResult<Value> {
        // Capability check happens first so a missing crypto build fails
        // with its own error even when the signature is malformed.
        let event_signature =
            idcheck_crypto::hmac_sha256(self.webhook_token.as_bytes(), raw_event_body)?;

        let given_signature =
            hex::decode(hex_signature).map_err(|_| ApiError::InvalidSignature)?;

        if !idcheck_crypto::constant_time_compare(&given_signature, &event_signature) {
            return Err(ApiError::InvalidSignature);
        }

        let event: Value = serde_json::from_slice(raw_event_body)?;
        let payload = event.get("payload").cloned().unwrap_or(Value::Null);
        Ok(casing::to_camel_case_keys(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "webhook-signing-token";

    fn sign(body: &[u8]) -> String {
        idcheck_crypto::hmac_sha256_hex(TOKEN.as_bytes(), body).unwrap()
    }

    #[test]
    fn test_valid_signature_returns_camel_payload() {
        let body = br#"{"payload":{"resource_type":"check","action":"check.completed","object":{"completed_at":"2024-01-01"}}}"#;
        let payload = WebhookVerifier::new(TOKEN)
            .read_payload(body, &sign(body))
            .unwrap();

        assert_eq!(payload["resourceType"], "check");
        assert_eq!(payload["action"], "check.completed");
        assert_eq!(payload["object"]["completedAt"], "2024-01-01");
    }

    #[test]
    fn test_flipped_signature_bit_rejected() {
        let body = br#"{"payload":{}}"#;
        let mut signature = sign(body).into_bytes();
        // Flip one bit in the first hex digit.
        signature[0] = if signature[0] == b'0' { b'1' } else { b'0' };
        let signature = String::from_utf8(signature).unwrap();

        assert!(matches!(
            WebhookVerifier::new(TOKEN).read_payload(body, &signature),
            Err(ApiError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_token_rejected() {
        let body = br#"{"payload":{}}"#;
        assert!(matches!(
            WebhookVerifier::new("other-token").read_payload(body, &sign(body)),
            Err(ApiError::InvalidSignature)
        ));
    }

    #[test]
    fn test_undecodable_signature_rejected() {
        let body = br#"{"payload":{}}"#;
        assert!(matches!(
            WebhookVerifier::new(TOKEN).read_payload(body, "not-hex"),
            Err(ApiError::InvalidSignature)
        ));
    }

    #[test]
    fn test_signed_non_json_body_is_parse_error() {
        let body = b"not json at all";
        assert!(matches!(
            WebhookVerifier::new(TOKEN).read_payload(body, &sign(body)),
            Err(ApiError::Json(_))
        ));
    }

    #[test]
    fn test_missing_payload_field_is_null() {
        let body = br#"{"other":1}"#;
        let payload = WebhookVerifier::new(TOKEN)
            .read_payload(body, &sign(body))
            .unwrap();
        assert!(payload.is_null());
    }
}
