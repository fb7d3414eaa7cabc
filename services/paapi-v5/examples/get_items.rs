//! Example of signing a PA-API GetItems request
//!
//! Reads credentials and settings from `AMAZON_*` environment variables and
//! prints the signed request instead of sending it.

use paapi_sign_core::{Context, OsEnv, Signer};
use paapi_sign_file_read_tokio::TokioFileRead;
use paapi_sign_v5::{Config, DefaultCredentialProvider, Operation, RequestSigner};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    println!("Using config: {config:?}");

    let builder = RequestSigner::from_config(&config, Operation::GetItems);
    let endpoint = builder.endpoint();
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), builder);

    // The payload must be serialized once and sent byte for byte as signed.
    let payload = serde_json::to_vec(&json!({
        "ItemIds": ["B000000000"],
        "PartnerTag": config.partner_tag.as_deref().unwrap_or("partner-22"),
        "PartnerType": "Associates",
        "Resources": ["ItemInfo.Title", "Offers.Listings.Price"],
    }))?;

    let (mut parts, _) = http::Request::post(&endpoint).body(())?.into_parts();
    match signer.sign(&mut parts, &payload).await {
        Ok(()) => {
            println!("Signed request: POST {endpoint}");
            for (name, value) in &parts.headers {
                println!("{name}: {value:?}");
            }
            println!("\n{}", String::from_utf8(payload)?);
        }
        Err(e) => eprintln!("Failed to sign request: {e}"),
    }

    Ok(())
}
