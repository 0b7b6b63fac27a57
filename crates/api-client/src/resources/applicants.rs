//! Applicant operations
//!
//! Applicants are the people checks are run against. Delete is soft on the
//! remote side, so deleted applicants can be restored.

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Applicants API interface
#[derive(Clone)]
pub struct ApplicantsApi {
    client: IdcheckClient,
}

impl ApplicantsApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Create an applicant.
    ///
    /// POST `applicants/`
    pub async fn create(&self, request: &ApplicantRequest) -> ApiResult<Applicant> {
        self.client
            .request(Method::POST, "applicants/", Some(request), NONE)
            .await
    }

    /// Fetch a single applicant by id.
    ///
    /// GET `applicants/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<Applicant> {
        self.client
            .request(Method::GET, &format!("applicants/{id}"), NONE, NONE)
            .await
    }

    /// Update an applicant.
    ///
    /// PUT `applicants/{id}`
    pub async fn update(&self, id: &str, request: &ApplicantRequest) -> ApiResult<Applicant> {
        self.client
            .request(Method::PUT, &format!("applicants/{id}"), Some(request), NONE)
            .await
    }

    /// Schedule an applicant for deletion.
    ///
    /// DELETE `applicants/{id}`
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::DELETE, &format!("applicants/{id}"), NONE, NONE)
            .await
    }

    /// Restore an applicant scheduled for deletion.
    ///
    /// POST `applicants/{id}/restore`
    pub async fn restore(&self, id: &str) -> ApiResult<()> {
        self.client
            .request_unit(Method::POST, &format!("applicants/{id}/restore"), NONE, NONE)
            .await
    }

    /// List applicants.
    ///
    /// GET `applicants/`
    pub async fn list(&self, params: &ListApplicantsParams) -> ApiResult<Vec<Applicant>> {
        let envelope: ApplicantList = self
            .client
            .request(Method::GET, "applicants/", NONE, Some(params))
            .await?;
        Ok(envelope.applicants)
    }
}

/// Pagination and filter parameters for listing applicants
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicantsParams {
    /// Page number to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Include applicants scheduled for deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

impl ListApplicantsParams {
    /// Create params with defaults (first page, API default size).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to fetch
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Include applicants scheduled for deletion
    #[must_use]
    pub fn with_deleted(mut self) -> Self {
        self.include_deleted = Some(true);
        self
    }
}

/// Fields accepted when creating or updating an applicant
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRequest {
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Current address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Identity numbers (SSN, driving licence, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_numbers: Option<Vec<IdNumber>>,
}

/// Applicant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    pub created_at: String,
    /// When the applicant will be permanently deleted, if scheduled
    #[serde(default)]
    pub delete_at: Option<String>,
    /// API location of this applicant
    pub href: String,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub dob: Option<String>,
    /// Current address
    #[serde(default)]
    pub address: Option<Address>,
    /// Identity numbers
    #[serde(default)]
    pub id_numbers: Option<Vec<IdNumber>>,
}

/// Postal address, also returned by the address picker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Flat or apartment number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flat_number: Option<String>,
    /// Building number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub building_number: Option<String>,
    /// Building name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub building_name: Option<String>,
    /// Street name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub street: Option<String>,
    /// Secondary street
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sub_street: Option<String>,
    /// Town or city
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub town: Option<String>,
    /// State, for US addresses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    /// Free-form address line 1
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line1: Option<String>,
    /// Free-form address line 2
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line2: Option<String>,
    /// Free-form address line 3
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line3: Option<String>,
}

/// Identity number attached to an applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdNumber {
    /// Number type, e.g. `ssn`, `driving_licence`
    #[serde(rename = "type")]
    pub number_type: String,
    /// The number itself
    pub value: String,
    /// Issuing state, for US driving licences
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state_code: Option<String>,
}

#[derive(Deserialize)]
struct ApplicantList {
    applicants: Vec<Applicant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_applicant_deserialize_camel_case() {
        let json = r#"{
            "id": "a-1",
            "createdAt": "2024-01-01T00:00:00Z",
            "href": "/v3/applicants/a-1",
            "firstName": "Jane",
            "lastName": "Doe",
            "address": { "postcode": "S2 2DF", "country": "GBR" }
        }"#;

        let applicant: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(applicant.id, "a-1");
        assert_eq!(applicant.first_name.as_deref(), Some("Jane"));
        assert_eq!(
            applicant.address.unwrap().postcode.as_deref(),
            Some("S2 2DF")
        );
    }

    #[test]
    fn test_request_serializes_camel_and_skips_none() {
        let request = ApplicantRequest {
            first_name: Some("Jane".into()),
            dob: Some("1990-01-01".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "firstName": "Jane", "dob": "1990-01-01" }));
    }

    #[test]
    fn test_list_params_builder() {
        let params = ListApplicantsParams::new()
            .with_page(2)
            .with_per_page(50)
            .with_deleted();

        assert_eq!(params.page, Some(2));
        assert_eq!(params.per_page, Some(50));
        assert_eq!(params.include_deleted, Some(true));
    }
}
