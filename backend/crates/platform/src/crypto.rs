//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use sha2::Sha256;

/// AES-256 key length in bytes
pub const AES_256_KEY_LEN: usize = 32;

/// HMAC-SHA256 tag length in bytes
pub const HMAC_SHA256_LEN: usize = 32;

/// Errors from the primitives in this module
///
/// Variants carry no detail on purpose; callers only need to know
/// which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("Invalid key length")]
    InvalidKeyLength,
    #[error("Encryption failed")]
    Seal,
    #[error("Decryption failed")]
    Open,
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a fixed-size array of cryptographically secure random bytes
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as unpadded URL-safe base64 (cookie-safe alphabet)
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded URL-safe base64
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Decode standard (padded) base64, as used for key material in the environment
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Compute HMAC-SHA256 over the concatenation of `parts`
pub fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_LEN], CryptoError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength)?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}

/// Verify an HMAC-SHA256 tag in constant time
pub fn verify_hmac_sha256(key: &[u8], parts: &[&[u8]], tag: &[u8]) -> bool {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(key) else {
        return false;
    };
    for part in parts {
        mac.update(part);
    }
    mac.verify_slice(tag).is_ok()
}

/// Encrypt with AES-256-GCM under a fresh random nonce
///
/// Output layout: `nonce (12) || ciphertext || tag (16)`.
pub fn seal_aes_256_gcm(
    key: &[u8; AES_256_KEY_LEN],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let key = aead_key(key)?;
    let nonce_bytes = random_array::<NONCE_LEN>();

    let mut in_out = plaintext.to_vec();
    key.seal_in_place_append_tag(
        Nonce::assume_unique_for_key(nonce_bytes),
        Aad::from(aad),
        &mut in_out,
    )
    .map_err(|_| CryptoError::Seal)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + in_out.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&in_out);
    Ok(sealed)
}

/// Decrypt output of [`seal_aes_256_gcm`]
pub fn open_aes_256_gcm(
    key: &[u8; AES_256_KEY_LEN],
    aad: &[u8],
    sealed: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < NONCE_LEN {
        return Err(CryptoError::Open);
    }
    let key = aead_key(key)?;
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::try_assume_unique_for_key(nonce).map_err(|_| CryptoError::Open)?;

    let mut in_out = ciphertext.to_vec();
    let plaintext = key
        .open_in_place(nonce, Aad::from(aad), &mut in_out)
        .map_err(|_| CryptoError::Open)?;
    Ok(plaintext.to_vec())
}

fn aead_key(key: &[u8; AES_256_KEY_LEN]) -> Result<LessSafeKey, CryptoError> {
    let unbound = UnboundKey::new(&AES_256_GCM, key).map_err(|_| CryptoError::InvalidKeyLength)?;
    Ok(LessSafeKey::new(unbound))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", &[b"what do ya want for nothing?"]).unwrap();
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_parts_are_concatenated() {
        let whole = hmac_sha256(b"Jefe", &[b"what do ya want for nothing?"]).unwrap();
        let split = hmac_sha256(b"Jefe", &[b"what do ya ", b"want for nothing?"]).unwrap();
        assert_eq!(whole, split);
    }

    #[test]
    fn test_verify_hmac() {
        let key = [42u8; 64];
        let tag = hmac_sha256(&key, &[b"test message"]).unwrap();

        assert!(verify_hmac_sha256(&key, &[b"test message"], &tag));
        assert!(!verify_hmac_sha256(&key, &[b"test messagf"], &tag));
        assert!(!verify_hmac_sha256(&[43u8; 64], &[b"test message"], &tag));
        assert!(!verify_hmac_sha256(&key, &[b"test message"], &tag[..31]));
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));

        let a = random_array::<32>();
        let b = random_array::<32>();
        assert_ne!(a, b);
    }

    #[test]
    fn test_base64url_is_cookie_safe() {
        let data: Vec<u8> = (0u8..=255).collect();
        let encoded = to_base64url(&data);
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(from_base64url(&encoded).unwrap(), data);
    }

    #[test]
    fn test_aes_gcm_seal_open() {
        let key = [7u8; AES_256_KEY_LEN];
        let sealed = seal_aes_256_gcm(&key, b"session", b"hello").unwrap();
        assert_eq!(sealed.len(), NONCE_LEN + 5 + 16);

        let opened = open_aes_256_gcm(&key, b"session", &sealed).unwrap();
        assert_eq!(opened, b"hello");
    }

    #[test]
    fn test_aes_gcm_nonce_is_fresh() {
        let key = [7u8; AES_256_KEY_LEN];
        let a = seal_aes_256_gcm(&key, b"", b"same").unwrap();
        let b = seal_aes_256_gcm(&key, b"", b"same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_aes_gcm_rejects_tampering() {
        let key = [7u8; AES_256_KEY_LEN];
        let mut sealed = seal_aes_256_gcm(&key, b"session", b"hello").unwrap();

        assert_eq!(
            open_aes_256_gcm(&key, b"other", &sealed),
            Err(CryptoError::Open)
        );
        assert_eq!(
            open_aes_256_gcm(&[8u8; AES_256_KEY_LEN], b"session", &sealed),
            Err(CryptoError::Open)
        );

        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert_eq!(
            open_aes_256_gcm(&key, b"session", &sealed),
            Err(CryptoError::Open)
        );
        assert_eq!(
            open_aes_256_gcm(&key, b"session", &[0u8; 4]),
            Err(CryptoError::Open)
        );
    }
}
