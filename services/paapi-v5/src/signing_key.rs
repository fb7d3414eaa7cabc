use crate::constants::SCOPE_TERMINATOR;
use paapi_sign_core::hash::hmac_sha256;
use std::fmt::{Debug, Formatter};

/// SigningKey is the scoped key derived from a secret key.
///
/// It is derived for one signing operation and dropped with it.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Derive the signing key for `date` (`YYYYMMDD`), `region` and `service`.
    ///
    /// ```text
    /// kDate    = HMAC("AWS4" + secret, date)
    /// kRegion  = HMAC(kDate, region)
    /// kService = HMAC(kRegion, service)
    /// kSigning = HMAC(kService, "aws4_request")
    /// ```
    pub fn derive(secret: &str, date: &str, region: &str, service: &str) -> Self {
        // Sign secret
        let secret = format!("AWS4{secret}");
        // Sign date
        let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
        // Sign region
        let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
        // Sign service
        let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
        // Sign request
        let sign_request = hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes());

        Self(sign_request)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}
