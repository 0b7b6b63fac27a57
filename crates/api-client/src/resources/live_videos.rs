//! Live video operations
//!
//! Live videos are captured during the applicant flow; both the full video
//! and a single representative frame can be downloaded.

use super::NONE;
use crate::client::IdcheckClient;
use crate::download::Download;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Live videos API interface
#[derive(Clone)]
pub struct LiveVideosApi {
    client: IdcheckClient,
}

impl LiveVideosApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Download a live video's content.
    ///
    /// GET `live_videos/{id}/download`
    pub async fn download(&self, id: &str) -> ApiResult<Download> {
        self.client
            .download(&format!("live_videos/{id}/download"))
            .await
    }

    /// Download a single frame of a live video.
    ///
    /// GET `live_videos/{id}/frame`
    pub async fn frame(&self, id: &str) -> ApiResult<Download> {
        self.client
            .download(&format!("live_videos/{id}/frame"))
            .await
    }

    /// Fetch a single live video by id.
    ///
    /// GET `live_videos/{id}`
    pub async fn find(&self, id: &str) -> ApiResult<LiveVideo> {
        self.client
            .request(Method::GET, &format!("live_videos/{id}"), NONE, NONE)
            .await
    }

    /// List an applicant's live videos.
    ///
    /// GET `live_videos/`
    pub async fn list(&self, applicant_id: &str) -> ApiResult<Vec<LiveVideo>> {
        let envelope: LiveVideoList = self
            .client
            .request(
                Method::GET,
                "live_videos/",
                NONE,
                Some(&ListQuery { applicant_id }),
            )
            .await?;
        Ok(envelope.live_videos)
    }
}

/// Live video entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveVideo {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    pub created_at: String,
    /// API location of this video
    pub href: String,
    /// Download endpoint for the video content
    pub download_href: String,
    /// Original file name
    pub file_name: String,
    /// MIME type of the video
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
struct LiveVideoList {
    live_videos: Vec<LiveVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_video_deserialize() {
        let json = r#"{
            "id": "v-1",
            "createdAt": "2024-01-01T00:00:00Z",
            "href": "/v3/live_videos/v-1",
            "downloadHref": "/v3/live_videos/v-1/download",
            "fileName": "capture.mp4",
            "fileType": "video/mp4",
            "fileSize": 1048576
        }"#;

        let video: LiveVideo = serde_json::from_str(json).unwrap();
        assert_eq!(video.id, "v-1");
        assert_eq!(video.file_type, "video/mp4");
    }
}
