//! Live photo operations
//!
//! Live photos are selfies captured during the applicant flow, uploaded as
//! multipart form-data.

use super::NONE;
use crate::client::IdcheckClient;
use crate::download::Download;
use crate::error::ApiResult;
use crate::form::FileUpload;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Live photos API interface
#[derive(Clone)]
pub struct LivePhotosApi {
    client: IdcheckClient,
}

impl LivePhotosApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Upload a live photo for an applicant.
    ///
    /// POST `live_photos/` (multipart)
    pub async fn upload(
        &self,
        file: FileUpload,
        request: &LivePhotoRequest,
    ) -> ApiResult<LivePhoto> {
        self.client.upload("live_photos", file, request).await
    }

    /// Download a live photo's image content.
    ///
    /// GET `live_photos/{id}/download`
    pub async fn download(&self, id: &str) -> ApiResult<Download> {
        self.client
            .download(&format!("live_photos/{id}/download"))
            .await
    }

    /// Fetch a single live photo by id.
    ///
    /// GET `live_photos/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<LivePhoto> {
        self.client
            .request(Method::GET, &format!("live_photos/{id}"), NONE, NONE)
            .await
    }

    /// List an applicant's live photos.
    ///
    /// GET `live_photos/`
    pub async fn list(&self, applicant_id: &str) -> ApiResult<Vec<LivePhoto>> {
        let envelope: LivePhotoList = self
            .client
            .request(
                Method::GET,
                "live_photos/",
                NONE,
                Some(&ListQuery { applicant_id }),
            )
            .await?;
        Ok(envelope.live_photos)
    }
}

/// Metadata accompanying a live photo upload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePhotoRequest {
    /// Applicant the photo belongs to
    pub applicant_id: String,
    /// Whether the API should run advanced face validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_validation: Option<bool>,
}

/// Live photo entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePhoto {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    pub created_at: String,
    /// API location of this photo
    pub href: String,
    /// Download endpoint for the image content
    pub download_href: String,
    /// Original file name
    pub file_name: String,
    /// MIME type of the image
    pub file_type: String,
    /// File size in bytes
    pub file_size: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery<'a> {
    applicant_id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LivePhotoList {
    live_photos: Vec<LivePhoto>,
}
