//! HMAC-SHA256 signing and verification.

use crate::{CryptoError, Result};

/// Compute the HMAC-SHA256 of `message` keyed with `key`.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - Message to sign
///
/// # Returns
/// The raw 32-byte digest, or [`CryptoError::Unsupported`] when the
/// `hmac-sha256` feature is disabled.
#[cfg(feature = "hmac-sha256")]
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .expect("HMAC can take key of any size");
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute the HMAC-SHA256 of `message` keyed with `key`.
///
/// Always returns [`CryptoError::Unsupported`] in this build: the
/// `hmac-sha256` feature is disabled.
#[cfg(not(feature = "hmac-sha256"))]
pub fn hmac_sha256(_key: &[u8], _message: &[u8]) -> Result<Vec<u8>> {
    Err(CryptoError::Unsupported)
}

/// Compute the HMAC-SHA256 of `message` and return it hex-encoded.
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> Result<String> {
    Ok(hex::encode(hmac_sha256(key, message)?))
}

/// Verify a signature against the HMAC-SHA256 of `message`.
///
/// The comparison is constant-time.
///
/// # Arguments
/// * `key` - Secret key bytes
/// * `message` - The signed message
/// * `signature` - The raw signature bytes to check
///
/// # Returns
/// Ok(()) if the signature matches, [`CryptoError::SignatureMismatch`]
/// otherwise.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    let expected = hmac_sha256(key, message)?;
    if crate::constant_time_compare(signature, &expected) {
        Ok(())
    } else {
        Err(CryptoError::SignatureMismatch)
    }
}

#[cfg(all(test, feature = "hmac-sha256"))]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_digest_length() {
        let sig = hmac_sha256(b"secret", b"hello world").unwrap();
        assert_eq!(sig.len(), 32);
    }

    #[test]
    fn test_hmac_sha256_hex() {
        let sig = hmac_sha256_hex(b"secret", b"hello world").unwrap();

        // 64 hex chars for SHA256
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hmac_sha256_known_vector() {
        // RFC 4231 test case 2
        let sig = hmac_sha256_hex(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_verify_match() {
        let sig = hmac_sha256(b"secret", b"payload").unwrap();
        assert!(verify_hmac_sha256(b"secret", b"payload", &sig).is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let mut sig = hmac_sha256(b"secret", b"payload").unwrap();
        sig[0] ^= 0x01;
        assert!(matches!(
            verify_hmac_sha256(b"secret", b"payload", &sig),
            Err(CryptoError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_verify_wrong_key() {
        let sig = hmac_sha256(b"secret", b"payload").unwrap();
        assert!(verify_hmac_sha256(b"other", b"payload", &sig).is_err());
    }
}
