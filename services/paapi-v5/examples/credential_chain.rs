//! Example of using a custom credential provider chain

use async_trait::async_trait;
use paapi_sign_core::{Context, ProvideCredential, ProvideCredentialChain, Result, StaticEnv};
use paapi_sign_v5::{
    Credential, DefaultCredentialProvider, DotenvCredentialProvider, EnvCredentialProvider,
};

/// A provider that reads keys from a secret store, mocked here with fixed values.
#[derive(Debug)]
struct SecretStoreCredentialProvider {
    access_key: String,
    secret_key: String,
}

#[async_trait]
impl ProvideCredential for SecretStoreCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        println!("Loading credentials from secret store");
        Ok(Some(Credential::new(&self.access_key, &self.secret_key)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // No AMAZON_* variables and no dotenv file, so only the last provider answers.
    let ctx = Context::new().with_env(StaticEnv::default());

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(DotenvCredentialProvider::new().with_path("/nonexistent/.env"))
        .push(SecretStoreCredentialProvider {
            access_key: "AKIDEXAMPLE".to_string(),
            secret_key: "wJalrXUtnFEMI/K7MDENG".to_string(),
        });
    let provider = DefaultCredentialProvider::with_chain(chain);

    match provider.provide_credential(&ctx).await? {
        Some(cred) => println!("Found credential: {cred:?}"),
        None => println!("No credential found in any provider"),
    }

    Ok(())
}
