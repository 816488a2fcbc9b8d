//! Webhook signature check.
//!
//! LINE signs each webhook body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64 digest in `X-Line-Signature`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Verifies webhook bodies against the channel secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}

impl SignatureVerifier {
    #[must_use]
    pub fn new(channel_secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: channel_secret.as_ref().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length")
    }

    /// Base64 signature for `body`.
    pub fn sign(&self, body: &[u8]) -> String {
        let mut mac = self.mac();
        mac.update(body);
        STANDARD.encode(mac.finalize().into_bytes())
    }

    /// Check `signature` against `body` in constant time.
    ///
    /// # Errors
    ///
    /// [`SignatureError::Missing`] without a header, [`SignatureError::Mismatch`]
    /// when the signature is not valid base64 or does not match.
    pub fn verify(&self, body: &[u8], signature: Option<&str>) -> Result<(), SignatureError> {
        let signature = signature.ok_or(SignatureError::Missing)?;
        let expected = STANDARD
            .decode(signature.trim())
            .map_err(|_| SignatureError::Mismatch)?;

        let mut mac = self.mac();
        mac.update(body);
        mac.verify_slice(&expected)
            .map_err(|_| SignatureError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_own_signature() {
        let verifier = SignatureVerifier::new("secret");
        let body = br#"{"events":[]}"#;
        let signature = verifier.sign(body);
        assert_eq!(verifier.verify(body, Some(&signature)), Ok(()));
    }

    #[test]
    fn rejects_tampered_body() {
        let verifier = SignatureVerifier::new("secret");
        let signature = verifier.sign(b"original");
        assert_eq!(
            verifier.verify(b"tampered", Some(&signature)),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_other_secret() {
        let signature = SignatureVerifier::new("a").sign(b"body");
        assert_eq!(
            SignatureVerifier::new("b").verify(b"body", Some(&signature)),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_missing_and_garbage() {
        let verifier = SignatureVerifier::new("secret");
        assert_eq!(verifier.verify(b"body", None), Err(SignatureError::Missing));
        assert_eq!(
            verifier.verify(b"body", Some("not base64!")),
            Err(SignatureError::Mismatch)
        );
    }
}
