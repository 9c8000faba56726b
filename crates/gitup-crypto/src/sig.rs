use hmac::{Mac, SimpleHmac};
use sha1::Sha1;

use super::errors::CryptoError;

/// Prefix of the `X-Hub-Signature` header value.
pub const SIGNATURE_PREFIX: &str = "sha1=";

/// Decoded webhook signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Parse a `sha1=<hex>` header value.
    pub fn parse(header: &str) -> Result<Self, CryptoError> {
        let encoded = header
            .strip_prefix(SIGNATURE_PREFIX)
            .ok_or(CryptoError::MissingSignaturePrefix)?;

        // Output is sized from the input, any digest length decodes.
        let decoded = hex::decode(encoded).map_err(|_| CryptoError::InvalidSignatureFormat {
            sig: encoded.to_string(),
        })?;
        if decoded.is_empty() {
            return Err(CryptoError::InvalidSignatureFormat { sig: String::new() });
        }

        Ok(Self(decoded))
    }

    /// Check the signature against the raw body, in constant time.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        let mut hmac = SimpleHmac::<Sha1>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;

        hmac.update(body);
        Ok(hmac.verify_slice(&self.0).is_ok())
    }

    /// Decoded digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Verify a webhook signature header; every failure is a plain `false`.
pub fn verify_signature(header: &str, secret: &str, body: &[u8]) -> bool {
    Signature::parse(header)
        .and_then(|sig| sig.is_valid(body, secret))
        .unwrap_or(false)
}
