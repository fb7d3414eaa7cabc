use crate::authorization::{assemble, credential_scope};
use crate::canonical_request::{CanonicalRequest, RequestDescriptor};
use crate::constants::{
    CONTENT_ENCODING_AMZ, CONTENT_TYPE_JSON, DEFAULT_HOST, DEFAULT_REGION, DEFAULT_SERVICE,
    X_AMZ_DATE, X_AMZ_TARGET,
};
use crate::signing_key::SigningKey;
use crate::{Config, Credential, Operation};
use http::request::Parts;
use http::{header, HeaderMap, HeaderValue, Method};
use log::debug;
use paapi_sign_core::time::{DateTime, Timestamp};
use paapi_sign_core::{Error, Result, SignRequest};

/// RequestSigner that implements AWS SigV4 for one PA-API operation.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
/// - [PA-API 5 request signing](https://webservices.amazon.com/paapi5/documentation/sending-request.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    operation: Operation,
    host: String,
    region: String,
    service: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for `operation` against the default host and region.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            host: DEFAULT_HOST.to_string(),
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),

            time: None,
        }
    }

    /// Create a new signer for `operation` using host, region and service from `config`.
    pub fn from_config(config: &Config, operation: Operation) -> Self {
        Self::new(operation)
            .with_host(&config.host)
            .with_region(&config.region)
            .with_service(&config.service)
    }

    /// Set the target host.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Set the region used in the credential scope.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Set the service used in the credential scope.
    pub fn with_service(mut self, service: &str) -> Self {
        self.service = service.to_string();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The operation this signer is bound to.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Endpoint URL: `https://<host><path>`.
    pub fn endpoint(&self) -> String {
        format!("https://{}{}", self.host, self.operation.path())
    }

    /// Compute the complete header set for `payload` signed at `timestamp`.
    ///
    /// The returned map holds `host`, `x-amz-date`, `x-amz-target`,
    /// `content-type`, `content-encoding` and `authorization`.
    pub fn sign_headers(
        &self,
        cred: &Credential,
        payload: &[u8],
        timestamp: &Timestamp,
    ) -> Result<HeaderMap> {
        let target = self.operation.target();
        self.signed_header_map(
            &RequestDescriptor {
                method: Method::POST.as_str(),
                uri: self.operation.path(),
                query: "",
                host: &self.host,
                target: &target,
                payload,
            },
            cred,
            timestamp,
        )
    }

    /// Build a ready to send `POST` request carrying `payload` and its signed headers.
    pub fn build_request(
        &self,
        cred: &Credential,
        payload: impl Into<Vec<u8>>,
        timestamp: &Timestamp,
    ) -> Result<http::Request<Vec<u8>>> {
        let payload = payload.into();
        let headers = self.sign_headers(cred, &payload, timestamp)?;

        let mut req = http::Request::post(self.endpoint()).body(payload)?;
        *req.headers_mut() = headers;
        Ok(req)
    }

    fn signed_header_map(
        &self,
        req: &RequestDescriptor<'_>,
        cred: &Credential,
        timestamp: &Timestamp,
    ) -> Result<HeaderMap> {
        let creq = CanonicalRequest::build(req, timestamp.iso8601());
        debug!("calculated canonical request: {}", creq.as_str());

        // Scope: "20240101/<region>/<service>/aws4_request"
        let scope = credential_scope(timestamp.date(), &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let signing_key =
            SigningKey::derive(&cred.secret_key, timestamp.date(), &self.region, &self.service);
        let authorization = assemble(&creq, timestamp, &scope, &signing_key, &cred.access_key);

        let mut headers = HeaderMap::with_capacity(6);
        headers.insert(header::HOST, header_value("host", req.host)?);
        headers.insert(X_AMZ_DATE, header_value(X_AMZ_DATE, timestamp.iso8601())?);
        headers.insert(X_AMZ_TARGET, header_value(X_AMZ_TARGET, req.target)?);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_JSON),
        );
        headers.insert(
            header::CONTENT_ENCODING,
            HeaderValue::from_static(CONTENT_ENCODING_AMZ),
        );

        let mut authorization = header_value("authorization", &authorization)?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        Ok(headers)
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "credential is required to sign PA-API requests",
            ));
        };

        // The target header is fixed by the operation, so the path must match it.
        if req.uri.path() != self.operation.path() {
            return Err(Error::request_invalid(format!(
                "{} must be sent to {}, got {}",
                self.operation,
                self.operation.path(),
                req.uri.path()
            )));
        }

        let timestamp = Timestamp::from(self.time.unwrap_or_else(paapi_sign_core::time::now));
        let target = self.operation.target();
        // Userinfo in the authority must never reach the host header.
        let host = match (req.uri.host(), req.uri.port_u16()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => self.host.clone(),
        };

        let headers = self.signed_header_map(
            &RequestDescriptor {
                method: req.method.as_str(),
                uri: req.uri.path(),
                query: req.uri.query().unwrap_or_default(),
                host: &host,
                target: &target,
                payload: body,
            },
            cred,
            &timestamp,
        )?;

        // Apply to the request.
        for (name, value) in headers {
            if let Some(name) = name {
                req.headers.insert(name, value);
            }
        }
        Ok(())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::request_invalid(format!("value of {name} can't be used as a header value"))
            .with_source(e)
    })
}
