//! Webhook configuration operations
//!
//! Registers the endpoints the API delivers events to. The `token`
//! returned on creation is the signing secret for
//! [`WebhookVerifier`](crate::webhook::WebhookVerifier).

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Webhooks API interface
#[derive(Clone)]
pub struct WebhooksApi {
    client: IdcheckClient,
}

impl WebhooksApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Register a webhook endpoint.
    ///
    /// POST `webhooks/`
    pub async fn create(&self, request: &WebhookRequest) -> ApiResult<Webhook> {
        self.client
            .request(Method::POST, "webhooks/", Some(request), NONE)
            .await
    }

    /// Fetch a single webhook by id.
    ///
    /// GET `webhooks/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<Webhook> {
        self.client
            .request(Method::GET, &format!("webhooks/{id}"), NONE, NONE)
            .await
    }

    /// Update a webhook.
    ///
    /// PUT `webhooks/{id}`
    pub async fn update(&self, id: &str, request: &WebhookRequest) -> ApiResult<Webhook> {
        self.client
            .request(Method::PUT, &format!("webhooks/{id}"), Some(request), NONE)
            .await
    }

    /// Delete a webhook.
    ///
    /// DELETE `webhooks/{id}`
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::DELETE, &format!("webhooks/{id}"), NONE, NONE)
            .await
    }

    /// List registered webhooks.
    ///
    /// GET `webhooks/`
    pub async fn list(&self) -> ApiResult<Vec<Webhook>> {
        let envelope: WebhookList = self
            .client
            .request(Method::GET, "webhooks/", NONE, NONE)
            .await?;
        Ok(envelope.webhooks)
    }
}

/// Fields accepted when creating or updating a webhook
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Endpoint URL events are delivered to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether the webhook is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Environments to deliver for, e.g. `live`, `sandbox`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<String>>,
    /// Event types to deliver; all when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

/// Webhook entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Unique identifier
    pub id: String,
    /// Endpoint URL events are delivered to
    pub url: String,
    /// Whether the webhook is active
    pub enabled: bool,
    /// Event types delivered to this endpoint
    #[serde(default)]
    pub events: Vec<String>,
    /// Signing secret for verifying deliveries
    pub token: String,
    /// API location of this webhook
    pub href: String,
}

#[derive(Deserialize)]
struct WebhookList {
    webhooks: Vec<Webhook>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_deserialize() {
        let json = r#"{
            "id": "w-1",
            "url": "https://example.com/events",
            "enabled": true,
            "events": ["check.completed"],
            "token": "signing-secret",
            "href": "/v3/webhooks/w-1"
        }"#;

        let webhook: Webhook = serde_json::from_str(json).unwrap();
        assert!(webhook.enabled);
        assert_eq!(webhook.events, vec!["check.completed"]);
        assert_eq!(webhook.token, "signing-secret");
    }
}
