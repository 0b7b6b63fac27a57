//! Check operations
//!
//! A check runs one or more reports against an applicant. The check's
//! `report_ids` are plain strings; no referential integrity is enforced
//! client-side.

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Checks API interface
#[derive(Clone)]
pub struct ChecksApi {
    client: IdcheckClient,
}

impl ChecksApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Create a check.
    ///
    /// POST `checks/`
    pub async fn create(&self, request: &CheckRequest) -> ApiResult<Check> {
        self.client
            .request(Method::POST, "checks/", Some(request), NONE)
            .await
    }

    /// Fetch a single check by id.
    ///
    /// GET `checks/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<Check> {
        self.client
            .request(Method::GET, &format!("checks/{id}"), NONE, NONE)
            .await
    }

    /// List an applicant's checks.
    ///
    /// GET `checks/`
    pub async fn list(&self, applicant_id: &str) -> ApiResult<Vec<Check>> {
        let envelope: CheckList = self
            .client
            .request(
                Method::GET,
                "checks/",
                NONE,
                Some(&ListQuery { applicant_id }),
            )
            .await?;
        Ok(envelope.checks)
    }

    /// Resume a paused check.
    ///
    /// POST `checks/{id}/resume`
    pub async fn resume(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::POST, &format!("checks/{id}/resume"), NONE, NONE)
            .await
    }
}

/// Fields accepted when creating a check
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    /// Applicant to run the check against
    pub applicant_id: String,
    /// Names of the reports to run, e.g. `document`, `facial_similarity_photo`
    pub report_names: Vec<String>,
    /// Whether the applicant fills in their own data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_provides_data: Option<bool>,
    /// Run the check asynchronously (the default on the remote side)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asynchronous: Option<bool>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Suppress applicant form emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_form_emails: Option<bool>,
    /// Redirect URI for applicant-completed flows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Check entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    /// Unique identifier
    pub id: String,
    /// IDs of the reports run by this check
    #[serde(default)]
    pub report_ids: Vec<String>,
    /// Creation timestamp
    pub created_at: String,
    /// API location of this check
    pub href: String,
    /// Applicant the check was run against
    pub applicant_id: String,
    /// Whether the applicant filled in their own data
    #[serde(default)]
    pub applicant_provides_data: bool,
    /// Current status, e.g. `in_progress`, `complete`
    pub status: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Overall result, once complete
    #[serde(default)]
    pub result: Option<String>,
    /// Applicant form URI, when the applicant provides data
    #[serde(default)]
    pub form_uri: Option<String>,
    /// Redirect URI for applicant-completed flows
    #[serde(default)]
    pub redirect_uri: Option<String>,
    /// Dashboard URI for the results
    #[serde(default)]
    pub results_uri: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery<'a> {
    applicant_id: &'a str,
}

#[derive(Deserialize)]
struct CheckList {
    checks: Vec<Check>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_deserialize() {
        let json = r#"{
            "id": "c-1",
            "reportIds": ["r-1", "r-2"],
            "createdAt": "2024-01-01T00:00:00Z",
            "href": "/v3/checks/c-1",
            "applicantId": "a-1",
            "applicantProvidesData": false,
            "status": "in_progress",
            "tags": [],
            "result": null,
            "resultsUri": "https://dashboard.example.com/checks/c-1"
        }"#;

        let check: Check = serde_json::from_str(json).unwrap();
        assert_eq!(check.report_ids, vec!["r-1", "r-2"]);
        assert_eq!(check.status, "in_progress");
        assert!(check.result.is_none());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = CheckRequest {
            applicant_id: "a-1".into(),
            report_names: vec!["document".into()],
            asynchronous: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "applicantId": "a-1",
                "reportNames": ["document"],
                "asynchronous": true
            })
        );
    }
}
