//! SDK token generation
//!
//! Short-lived tokens handed to the frontend capture SDKs.

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// SDK tokens API interface
#[derive(Clone)]
pub struct SdkTokensApi {
    client: IdcheckClient,
}

impl SdkTokensApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Generate an SDK token for an applicant.
    ///
    /// POST `sdk_token/`
    pub async fn generate(&self, request: &SdkTokenRequest) -> ApiResult<String> {
        let envelope: TokenResponse = self
            .client
            .request(Method::POST, "sdk_token/", Some(request), NONE)
            .await?;
        Ok(envelope.token)
    }
}

/// Fields accepted when generating an SDK token
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkTokenRequest {
    /// Applicant the token is scoped to
    pub applicant_id: String,
    /// Mobile application id the token is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Referrer URL pattern the token is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = SdkTokenRequest {
            applicant_id: "a-1".into(),
            referrer: Some("https://*.example.com/*".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "applicantId": "a-1", "referrer": "https://*.example.com/*" })
        );
    }
}
