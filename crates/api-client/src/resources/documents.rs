//! Document operations
//!
//! Documents are uploaded as multipart form-data and downloaded as raw
//! byte streams in whatever format they were originally uploaded in.

use super::NONE;
use crate::client::IdcheckClient;
use crate::download::Download;
use crate::error::ApiResult;
use crate::form::FileUpload;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Documents API interface
#[derive(Clone)]
pub struct DocumentsApi {
    client: IdcheckClient,
}

impl DocumentsApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Upload a document for an applicant.
    ///
    /// POST `documents/` (multipart)
    pub async fn upload(
        &self,
        file: FileUpload,
        request: &DocumentRequest,
    ) -> ApiResult<Document> {
        self.client.upload("documents", file, request).await
    }

    /// Download a document's file content.
    ///
    /// GET `documents/{id}/download`
    pub async fn download(&self, id: &str) -> ApiResult<Download> {
        self.client.download(&format!("documents/{id}/download")).await
    }

    /// Fetch a single document by id.
    ///
    /// GET `documents/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<Document> {
        self.client
            .request(Method::GET, &format!("documents/{id}"), NONE, NONE)
            .await
    }

    /// List an applicant's documents.
    ///
    /// GET `documents/`
    pub async fn list(&self, applicant_id: &str) -> ApiResult<Vec<Document>> {
        let envelope: DocumentList = self
            .client
            .request(
                Method::GET,
                "documents/",
                NONE,
                Some(&ListQuery { applicant_id }),
            )
            .await?;
        Ok(envelope.documents)
    }
}

/// Metadata accompanying a document upload
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    /// Applicant the document belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<String>,
    /// Document type, e.g. `passport`, `driving_licence`
    #[serde(rename = "type")]
    pub document_type: String,
    /// Which side of the document, `front` or `back`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// ISO 3166-1 alpha-3 issuing country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
}

/// Document entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier
    pub id: String,
    /// Applicant the document belongs to
    #[serde(default)]
    pub applicant_id: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// API location of this document
    pub href: String,
    /// Download endpoint for the file content
    pub download_href: String,
    /// Original file name
    pub file_name: String,
    /// File extension reported by the API
    pub file_type: String,
    /// File size in bytes
    pub file_size: u64,
    /// Document type
    #[serde(rename = "type")]
    pub document_type: String,
    /// Which side of the document
    #[serde(default)]
    pub side: Option<String>,
    /// Issuing country
    #[serde(default)]
    pub issuing_country: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery<'a> {
    applicant_id: &'a str,
}

#[derive(Deserialize)]
struct DocumentList {
    documents: Vec<Document>,
}
