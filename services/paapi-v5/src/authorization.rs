//! SigV4 string to sign and `authorization` header assembly.

use crate::canonical_request::CanonicalRequest;
use crate::constants::{ALGORITHM, SCOPE_TERMINATOR};
use crate::signing_key::SigningKey;
use log::debug;
use paapi_sign_core::hash::hex_hmac_sha256;
use paapi_sign_core::time::Timestamp;

/// Credential scope: `20240101/<region>/<service>/aws4_request`.
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{SCOPE_TERMINATOR}")
}

/// String to sign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20240101T000000Z
/// 20240101/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(timestamp: &Timestamp, scope: &str, creq: &CanonicalRequest) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{}",
        timestamp.iso8601(),
        creq.hashed()
    )
}

/// Lowercase hex HMAC-SHA256 of the string to sign.
pub fn signature(key: &SigningKey, string_to_sign: &str) -> String {
    hex_hmac_sha256(key.as_bytes(), string_to_sign.as_bytes())
}

/// Value of the `authorization` header.
pub fn authorization_header(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{ALGORITHM} Credential={access_key}/{scope}, \
         SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Assemble the authorization header for a canonical request.
///
/// Credentials are not validated here: an empty access key still produces a
/// header, which the service will then reject.
pub fn assemble(
    creq: &CanonicalRequest,
    timestamp: &Timestamp,
    scope: &str,
    key: &SigningKey,
    access_key: &str,
) -> String {
    let string_to_sign = string_to_sign(timestamp, scope, creq);
    debug!("calculated string to sign: {string_to_sign}");

    let signature = signature(key, &string_to_sign);
    authorization_header(access_key, scope, creq.signed_headers(), &signature)
}
