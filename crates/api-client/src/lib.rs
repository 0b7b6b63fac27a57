//! Typed client for the Idcheck identity-verification API
//!
//! This crate wraps the remote identity-verification service (applicants,
//! documents, checks, reports, webhooks and related resources) as typed
//! method calls over a shared authenticated HTTP transport.
//!
//! # Features
//!
//! - **Typed resources**: one API struct per remote entity, all composed
//!   from the same request/upload/download primitives
//! - **Wire casing translation**: snake_case keys on the wire, camelCase
//!   records at the library boundary
//! - **Uniform error classification**: every failed exchange becomes a
//!   structured [`ApiError`] with status code, type, message and optional
//!   field-level validation detail
//! - **Webhook verification**: constant-time HMAC-SHA256 signature checks
//!   via [`WebhookVerifier`]
//!
//! # Example
//!
//! ```rust,no_run
//! use idcheck_client::{ClientConfig, IdcheckClient, Region};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("api-token-here").with_region(Region::Eu);
//!     let client = IdcheckClient::with_config(config)?;
//!
//!     let applicant = client
//!         .applicants()
//!         .create(&idcheck_client::resources::applicants::ApplicantRequest {
//!             first_name: Some("Jane".into()),
//!             last_name: Some("Doe".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created applicant {}", applicant.id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod casing;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod form;
pub mod resources;
pub mod webhook;

pub use client::IdcheckClient;
pub use config::{ClientConfig, Region};
pub use download::Download;
pub use error::{ApiError, ApiResponseError, ApiResult};
pub use form::FileUpload;
pub use webhook::WebhookVerifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::IdcheckClient;
    pub use crate::config::{ClientConfig, Region};
    pub use crate::download::Download;
    pub use crate::error::{ApiError, ApiResponseError, ApiResult};
    pub use crate::form::FileUpload;
    pub use crate::webhook::WebhookVerifier;
}
