//! Report operations
//!
//! Reports are created by checks, never directly; this resource only reads
//! and steers them.

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reports API interface
#[derive(Clone)]
pub struct ReportsApi {
    client: IdcheckClient,
}

impl ReportsApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Fetch a single report by id.
    ///
    /// GET `reports/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<Report> {
        self.client
            .request(Method::GET, &format!("reports/{id}"), NONE, NONE)
            .await
    }

    /// List a check's reports.
    ///
    /// GET `reports/`
    pub async fn list(&self, check_id: &str) -> ApiResult<Vec<Report>> {
        let envelope: ReportList = self
            .client
            .request(Method::GET, "reports/", NONE, Some(&ListQuery { check_id }))
            .await?;
        Ok(envelope.reports)
    }

    /// Resume a paused report.
    ///
    /// POST `reports/{id}/resume`
    pub async fn resume(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::POST, &format!("reports/{id}/resume"), NONE, NONE)
            .await
    }

    /// Cancel a paused report.
    ///
    /// POST `reports/{id}/cancel`
    pub async fn cancel(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::POST, &format!("reports/{id}/cancel"), NONE, NONE)
            .await
    }
}

/// Report entity
///
/// `properties` and `breakdown` shapes vary per report type and are left
/// as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    pub created_at: String,
    /// Report name, e.g. `document`, `facial_similarity_photo`
    pub name: String,
    /// API location of this report
    pub href: String,
    /// Current status
    pub status: String,
    /// Result, once complete
    #[serde(default)]
    pub result: Option<String>,
    /// Sub-result for document reports
    #[serde(default)]
    pub sub_result: Option<String>,
    /// Report-type-specific properties
    #[serde(default)]
    pub properties: Option<Value>,
    /// Report-type-specific breakdown
    #[serde(default)]
    pub breakdown: Option<Value>,
    /// IDs of the documents the report ran against
    #[serde(default)]
    pub documents: Option<Vec<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery<'a> {
    check_id: &'a str,
}

#[derive(Deserialize)]
struct ReportList {
    reports: Vec<Report>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserialize() {
        let json = r#"{
            "id": "r-1",
            "createdAt": "2024-01-01T00:00:00Z",
            "name": "document",
            "href": "/v3/reports/r-1",
            "status": "complete",
            "result": "clear",
            "subResult": "clear",
            "breakdown": { "imageIntegrity": { "result": "clear" } },
            "documents": ["d-1"]
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.name, "document");
        assert_eq!(report.result.as_deref(), Some("clear"));
        assert_eq!(report.documents.unwrap(), vec!["d-1"]);
    }
}
