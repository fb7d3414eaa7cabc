//! Amazon Product Advertising API 5.0 signer
//!
//! Signs PA-API requests with AWS Signature Version 4 for the fixed PA-API
//! request shape: a JSON `POST` whose signed headers are `host`,
//! `x-amz-date` and `x-amz-target`.
//!
//! ## Example
//!
//! ```no_run
//! use paapi_sign_core::{Context, OsEnv, Result, Signer};
//! use paapi_sign_v5::{DefaultCredentialProvider, Operation, RequestSigner};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new(Operation::GetItems),
//! );
//!
//! let body = br#"{"ItemIds":["B000000000"]}"#;
//! let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
//!     .body(())?
//!     .into_parts();
//!
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    AMAZON_ACCESS_KEY, AMAZON_PAAPI_DOTENV_FILE, AMAZON_PAAPI_HOST, AMAZON_PAAPI_REGION,
    AMAZON_PARTNER_TAG, AMAZON_SECRET_KEY, DEFAULT_HOST, DEFAULT_REGION, DEFAULT_SERVICE,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod operation;
pub use operation::Operation;

mod canonical_request;
pub use canonical_request::{CanonicalRequest, RequestDescriptor};

mod signing_key;
pub use signing_key::SigningKey;

pub mod authorization;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
