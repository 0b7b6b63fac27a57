//! Multipart form encoding for file uploads
//!
//! Upload metadata is serialized through the casing translator, so field
//! names reach the wire in snake_case; null fields are omitted entirely
//! rather than sent empty.

use crate::casing;
use crate::error::{ApiError, ApiResult};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

/// A file to send in a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the API
    pub filename: String,
    /// MIME type of the content, when known
    pub content_type: Option<String>,
    /// Raw file content
    pub data: Vec<u8>,
}

impl FileUpload {
    /// Create a file upload from a name and its content.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data,
        }
    }

    /// Builder-style method to set the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Convert into a multipart part carrying filename and MIME type.
    pub(crate) fn into_part(self) -> ApiResult<Part> {
        let part = Part::bytes(self.data).file_name(self.filename);
        match self.content_type {
            Some(content_type) => Ok(part.mime_str(&content_type)?),
            None => Ok(part),
        }
    }
}

/// Encode upload metadata as a multipart form.
///
/// Each non-null field is appended as a text part under its snake_case
/// name; null fields are omitted. The binary `file` part is appended
/// separately by the caller.
pub(crate) fn to_form_data<M>(metadata: &M) -> ApiResult<Form>
where
    M: Serialize + ?Sized,
{
    let value = casing::serialize_snake_case(metadata)?;
    let Value::Object(map) = value else {
        return Err(ApiError::config("upload fields must serialize to an object"));
    };

    let mut form = Form::new();
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Metadata {
        applicant_id: String,
        document_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        side: Option<String>,
        advanced_validation: bool,
    }

    #[test]
    fn test_form_fields_snake_cased_and_nulls_omitted() {
        // Encode via the same path to_form_data uses, then inspect keys.
        let value = casing::serialize_snake_case(&Metadata {
            applicant_id: "abc".into(),
            document_type: None,
            side: None,
            advanced_validation: true,
        })
        .unwrap();

        let map = value.as_object().unwrap();
        assert!(map.contains_key("applicant_id"));
        assert!(map.contains_key("advanced_validation"));
        // Serialized as null, dropped by the encoder.
        assert!(map["document_type"].is_null());
        // Skipped entirely at serialization time.
        assert!(!map.contains_key("side"));

        let form = to_form_data(&Metadata {
            applicant_id: "abc".into(),
            document_type: None,
            side: None,
            advanced_validation: true,
        });
        assert!(form.is_ok());
    }

    #[test]
    fn test_non_object_metadata_rejected() {
        assert!(to_form_data(&42).is_err());
    }

    #[test]
    fn test_file_upload_builder() {
        let file = FileUpload::new("passport.png", vec![1, 2, 3]).with_content_type("image/png");
        assert_eq!(file.filename, "passport.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert!(file.into_part().is_ok());
    }

    #[test]
    fn test_invalid_mime_rejected() {
        let file = FileUpload::new("f.bin", vec![]).with_content_type("not a mime type");
        assert!(file.into_part().is_err());
    }
}
