use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on every call and used for exactly one
/// signature; nothing derived from it is kept between requests.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Signing request.
    ///
    /// Fails with [`crate::ErrorKind::CredentialInvalid`] before signing if no
    /// usable credential could be loaded.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cred = self.loader.provide_credential(&self.ctx).await?;
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "no valid credential found, access key and secret key are required",
            ));
        }

        self.builder.sign_request(req, body, cred.as_ref())
    }
}
