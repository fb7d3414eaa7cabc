use crate::constants::{SIGNED_HEADERS, X_AMZ_DATE, X_AMZ_TARGET};
use paapi_sign_core::hash::hex_sha256;

/// Attributes of a request that take part in its canonical form.
#[derive(Debug, Clone, Copy)]
pub struct RequestDescriptor<'a> {
    /// HTTP method, always `POST` for PA-API.
    pub method: &'a str,
    /// Canonical URI path, e.g. `/paapi5/getitems`.
    pub uri: &'a str,
    /// Canonical query string, empty for PA-API.
    pub query: &'a str,
    /// Target host.
    pub host: &'a str,
    /// Value of the `x-amz-target` header.
    pub target: &'a str,
    /// The exact payload bytes that will be sent.
    pub payload: &'a [u8],
}

/// CanonicalRequest is the SigV4 canonical form of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    canonical: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Build the canonical request for `req` signed at `amz_date` (`YYYYMMDDThhmmssZ`).
    ///
    /// ```text
    /// POST
    /// /paapi5/getitems
    ///
    /// host:webservices.amazon.co.jp
    /// x-amz-date:20240101T000000Z
    /// x-amz-target:com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems
    ///
    /// host;x-amz-date;x-amz-target
    /// <hex sha256 of payload>
    /// ```
    pub fn build(req: &RequestDescriptor<'_>, amz_date: &str) -> Self {
        let payload_hash = hex_sha256(req.payload);

        // 256 is specially chosen to avoid reallocation for most requests.
        let mut f = String::with_capacity(256);
        for line in [req.method, req.uri, req.query] {
            f.push_str(line);
            f.push('\n');
        }
        for (name, value) in [
            ("host", req.host),
            (X_AMZ_DATE, amz_date),
            (X_AMZ_TARGET, req.target),
        ] {
            f.push_str(name);
            f.push(':');
            f.push_str(value);
            f.push('\n');
        }
        f.push('\n');
        f.push_str(SIGNED_HEADERS);
        f.push('\n');
        f.push_str(&payload_hash);

        Self {
            canonical: f,
            payload_hash,
        }
    }

    /// The canonical request string.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Names of the signed headers, `;` separated.
    pub fn signed_headers(&self) -> &'static str {
        SIGNED_HEADERS
    }

    /// Lowercase hex SHA-256 of the payload.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Lowercase hex SHA-256 of the canonical request, the last line of the string to sign.
    pub fn hashed(&self) -> String {
        hex_sha256(self.canonical.as_bytes())
    }
}
