//! Document data extraction
//!
//! Runs autofill extraction against an uploaded document, returning its
//! classification and any machine-readable data found.

use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Extractions API interface
#[derive(Clone)]
pub struct ExtractionsApi {
    client: IdcheckClient,
}

impl ExtractionsApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Extract data from an uploaded document.
    ///
    /// POST `extractions/`
    pub async fn extract(&self, document_id: &str) -> ApiResult<Extraction> {
        self.client
            .request(
                Method::POST,
                "extractions/",
                Some(&ExtractionRequest { document_id }),
                NONE,
            )
            .await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionRequest<'a> {
    document_id: &'a str,
}

/// Extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Document the extraction ran against
    #[serde(default)]
    pub document_id: Option<String>,
    /// What kind of document was detected
    #[serde(default)]
    pub document_classification: Option<DocumentClassification>,
    /// Data read from the document
    #[serde(default)]
    pub extracted_data: Option<ExtractedData>,
}

/// Detected document classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentClassification {
    /// ISO 3166-1 alpha-3 issuing country
    #[serde(default)]
    pub issuing_country: Option<String>,
    /// Detected document type
    #[serde(default)]
    pub document_type: Option<String>,
    /// Issuing state, where applicable
    #[serde(default)]
    pub issuing_state: Option<String>,
}

/// Data read from a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Full name as printed
    #[serde(default)]
    pub full_name: Option<String>,
    /// Gender as printed
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Document expiry date
    #[serde(default)]
    pub date_of_expiry: Option<String>,
    /// Nationality
    #[serde(default)]
    pub nationality: Option<String>,
    /// Machine-readable zone, line 1
    #[serde(default)]
    pub mrz_line1: Option<String>,
    /// Machine-readable zone, line 2
    #[serde(default)]
    pub mrz_line2: Option<String>,
    /// Machine-readable zone, line 3
    #[serde(default)]
    pub mrz_line3: Option<String>,
    /// Address line 1
    #[serde(default)]
    pub address_line1: Option<String>,
    /// Address line 2
    #[serde(default)]
    pub address_line2: Option<String>,
    /// Address line 3
    #[serde(default)]
    pub address_line3: Option<String>,
    /// Address line 4
    #[serde(default)]
    pub address_line4: Option<String>,
    /// Address line 5
    #[serde(default)]
    pub address_line5: Option<String>,
}
