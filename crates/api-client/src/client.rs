//! Main API client implementation

use crate::casing;
use crate::config::ClientConfig;
use crate::download::Download;
use crate::error::{classify_response, ApiError, ApiResult};
use crate::form::{to_form_data, FileUpload};
use crate::resources::{
    AddressesApi, ApplicantsApi, ChecksApi, DocumentsApi, ExtractionsApi, LivePhotosApi,
    LiveVideosApi, ReportsApi, SdkTokensApi, WebhooksApi,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Idcheck API client
///
/// Holds one authenticated `reqwest` transport (bearer-token header, JSON
/// accept header, per-request timeout) shared by every resource. The client
/// is cheap to clone; concurrent calls are independent and there is no
/// shared mutable state.
#[derive(Clone)]
pub struct IdcheckClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl IdcheckClient {
    /// Create a client with the given API token and default configuration.
    pub fn new(api_token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(api_token))
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client with specific configuration.
    ///
    /// # Errors
    /// Returns a configuration error when the token is missing or the
    /// configuration is otherwise invalid.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Token token={}", config.api_token))
            .map_err(|_| ApiError::config("api_token contains invalid header characters"))?;
        auth.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, auth);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the resolved base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    // -------------------------------------------------------------------------
    // Resource accessors
    // -------------------------------------------------------------------------

    /// Access applicant operations
    #[must_use]
    pub fn applicants(&self) -> ApplicantsApi {
        ApplicantsApi::new(self.clone())
    }

    /// Access document operations
    #[must_use]
    pub fn documents(&self) -> DocumentsApi {
        DocumentsApi::new(self.clone())
    }

    /// Access live photo operations
    #[must_use]
    pub fn live_photos(&self) -> LivePhotosApi {
        LivePhotosApi::new(self.clone())
    }

    /// Access live video operations
    #[must_use]
    pub fn live_videos(&self) -> LiveVideosApi {
        LiveVideosApi::new(self.clone())
    }

    /// Access check operations
    #[must_use]
    pub fn checks(&self) -> ChecksApi {
        ChecksApi::new(self.clone())
    }

    /// Access report operations
    #[must_use]
    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.clone())
    }

    /// Access address lookup operations
    #[must_use]
    pub fn addresses(&self) -> AddressesApi {
        AddressesApi::new(self.clone())
    }

    /// Access webhook configuration operations
    #[must_use]
    pub fn webhooks(&self) -> WebhooksApi {
        WebhooksApi::new(self.clone())
    }

    /// Access SDK token generation
    #[must_use]
    pub fn sdk_tokens(&self) -> SdkTokensApi {
        SdkTokensApi::new(self.clone())
    }

    /// Access document data extraction
    #[must_use]
    pub fn extractions(&self) -> ExtractionsApi {
        ExtractionsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Request primitives shared by every resource
    // -------------------------------------------------------------------------

    /// Issue a JSON request and deserialize the response.
    ///
    /// The body and query are snake-cased on the way out; the decoded JSON
    /// response is camel-cased on the way in before deserializing into `T`.
    pub(crate) async fn request<T, B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let response = self.perform(method, path, body, query).await?;
        let value: Value = response.json().await?;
        Ok(serde_json::from_value(casing::to_camel_case_keys(value))?)
    }

    /// Issue a JSON request whose response body is ignored.
    pub(crate) async fn request_unit<B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.perform(method, path, body, query).await.map(|_| ())
    }

    /// Issue a multipart POST to `<segment>/`.
    pub(crate) async fn upload<T, M>(
        &self,
        segment: &str,
        file: FileUpload,
        metadata: &M,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        M: Serialize + ?Sized,
    {
        let url = self.url(&format!("{segment}/"));
        let request_id = Uuid::new_v4();
        let form = to_form_data(metadata)?.part("file", file.into_part()?);

        debug!(
            request_id = %request_id,
            segment = %segment,
            "Uploading multipart form"
        );

        let response = self
            .inner
            .post(&url)
            .header(X_REQUEST_ID, request_id.to_string())
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            let value: Value = response.json().await?;
            Ok(serde_json::from_value(casing::to_camel_case_keys(value))?)
        } else {
            let error = classify_response(response).await;
            warn!(request_id = %request_id, error = %error, "Upload failed");
            Err(error)
        }
    }

    /// Issue a GET for a streamed download, accepting any content type.
    pub(crate) async fn download(&self, path: &str) -> ApiResult<Download> {
        let url = self.url(path);
        let request_id = Uuid::new_v4();

        debug!(request_id = %request_id, path = %path, "Requesting download");

        let response = self
            .inner
            .get(&url)
            .header(X_REQUEST_ID, request_id.to_string())
            .header(ACCEPT, "*/*")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(Download::new(response))
        } else {
            let error = classify_response(response).await;
            warn!(request_id = %request_id, error = %error, "Download failed");
            Err(error)
        }
    }

    /// Send a request and hand any non-2xx response to the classifier.
    async fn perform<B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ApiResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request_id = Uuid::new_v4();

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, request_id.to_string());

        if let Some(query) = query {
            request = request.query(&query_pairs(&casing::serialize_snake_case(query)?));
        }

        if let Some(body) = body {
            request = request.json(&casing::serialize_snake_case(body)?);
        }

        debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Issuing API request"
        );

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(
                request_id = %request_id,
                status = status.as_u16(),
                "Request succeeded"
            );
            Ok(response)
        } else {
            let error = classify_response(response).await;
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %error,
                "API request failed"
            );
            Err(error)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url().trim_end_matches('/'), path)
    }
}

/// Flatten a snake-cased JSON object into query pairs, skipping nulls.
fn query_pairs(value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), scalar_string(v)))
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_skip_nulls() {
        let pairs = query_pairs(&json!({
            "page": 2,
            "per_page": null,
            "include_deleted": true,
            "applicant_id": "abc"
        }));

        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("include_deleted".to_string(), "true".to_string())));
        assert!(pairs.contains(&("applicant_id".to_string(), "abc".to_string())));
    }

    #[test]
    fn test_client_creation() {
        let client = IdcheckClient::new("test-token");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.idcheck.com/v3/");
    }

    #[test]
    fn test_client_rejects_empty_token() {
        assert!(matches!(
            IdcheckClient::new(""),
            Err(ApiError::MissingApiToken)
        ));
    }

    #[test]
    fn test_url_joining() {
        let client = IdcheckClient::new("test-token").unwrap();
        assert_eq!(
            client.url("applicants/123"),
            "https://api.idcheck.com/v3/applicants/123"
        );
    }
}
