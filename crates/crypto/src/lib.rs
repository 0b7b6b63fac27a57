//! Cryptographic utilities for Idcheck.
//!
//! This crate provides:
//! - HMAC-SHA256 signature generation and verification
//! - Constant-time comparison for security
//!
//! HMAC support is behind the default-on `hmac-sha256` feature. When the
//! feature is disabled, signing and verification return
//! [`CryptoError::Unsupported`] instead of failing at build or load time, so
//! callers can surface the missing capability only when it is actually used.

#![warn(missing_docs)]

mod error;
mod hmac_impl;
mod timing;

pub use error::{CryptoError, Result};
pub use hmac_impl::{hmac_sha256, hmac_sha256_hex, verify_hmac_sha256};
pub use timing::constant_time_compare;
