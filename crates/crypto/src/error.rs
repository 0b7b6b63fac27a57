//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Signature verification failed
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Invalid signature format
    #[error("Invalid signature format: {0}")]
    InvalidSignature(String),

    /// Crypto support is not compiled in (`hmac-sha256` feature disabled)
    #[error("Crypto support is not available")]
    Unsupported,
}
