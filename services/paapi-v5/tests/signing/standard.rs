use super::{init_signing_test, test_credential, test_timestamp};
use anyhow::Result;
use http::header;
use paapi_sign_core::time::parse_iso8601;
use paapi_sign_core::{Context, ErrorKind, OsEnv, SignRequest, Signer, StaticEnv};
use paapi_sign_v5::authorization::{credential_scope, string_to_sign};
use paapi_sign_v5::{
    CanonicalRequest, Config, EnvCredentialProvider, Operation, RequestDescriptor, RequestSigner,
    StaticCredentialProvider,
};
use pretty_assertions::assert_eq;

const GET_ITEMS_PAYLOAD: &str = r#"{"ItemIds":["B000000000"]}"#;
const GET_ITEMS_AUTHORIZATION: &str = "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/us-west-2/ProductAdvertisingAPI/aws4_request, SignedHeaders=host;x-amz-date;x-amz-target, Signature=75889d79b96ec1a679ee19874a2445736db112364f668143ae226e9f86a1decc";

#[test]
fn test_get_items_canonical_request() {
    let target = Operation::GetItems.target();
    let creq = CanonicalRequest::build(
        &RequestDescriptor {
            method: "POST",
            uri: "/paapi5/getitems",
            query: "",
            host: "webservices.amazon.co.jp",
            target: &target,
            payload: GET_ITEMS_PAYLOAD.as_bytes(),
        },
        "20240101T000000Z",
    );

    assert_eq!(
        creq.as_str(),
        "POST\n\
         /paapi5/getitems\n\
         \n\
         host:webservices.amazon.co.jp\n\
         x-amz-date:20240101T000000Z\n\
         x-amz-target:com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems\n\
         \n\
         host;x-amz-date;x-amz-target\n\
         e8d05cc8788902d305f3acd84aaae6d747d20378d6fa199498bd656999cbb71c"
    );
    assert_eq!(
        creq.hashed(),
        "410add690e5df2a84004d2c99dafe0292413ee57961198eb332d33aa1852e4f7"
    );

    let scope = credential_scope("20240101", "us-west-2", "ProductAdvertisingAPI");
    assert_eq!(
        string_to_sign(&test_timestamp(), &scope, &creq),
        "AWS4-HMAC-SHA256\n\
         20240101T000000Z\n\
         20240101/us-west-2/ProductAdvertisingAPI/aws4_request\n\
         410add690e5df2a84004d2c99dafe0292413ee57961198eb332d33aa1852e4f7"
    );
}

#[test]
fn test_get_items_end_to_end() -> Result<()> {
    let signer = init_signing_test(Operation::GetItems);

    let headers = signer.sign_headers(
        &test_credential(),
        GET_ITEMS_PAYLOAD.as_bytes(),
        &test_timestamp(),
    )?;

    assert_eq!(headers[header::AUTHORIZATION], GET_ITEMS_AUTHORIZATION);
    assert_eq!(headers["x-amz-date"], "20240101T000000Z");
    assert_eq!(headers[header::HOST], "webservices.amazon.co.jp");
    Ok(())
}

#[test]
fn test_empty_payload() -> Result<()> {
    let signer = init_signing_test(Operation::GetItems);

    let headers = signer.sign_headers(&test_credential(), b"", &test_timestamp())?;

    assert_eq!(
        headers[header::AUTHORIZATION],
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/us-west-2/ProductAdvertisingAPI/aws4_request, SignedHeaders=host;x-amz-date;x-amz-target, Signature=13651b9d5d31cb23e2e6a00189bdb03688d62848bb0411280c18a313cd07bf9a"
    );
    Ok(())
}

#[test]
fn test_signer_from_config() -> Result<()> {
    let config = Config::default().from_env(&Context::new().with_env(StaticEnv::from_pairs([
        ("AMAZON_PAAPI_HOST", "webservices.amazon.com"),
        ("AMAZON_PAAPI_REGION", "us-east-1"),
    ])));
    let signer = RequestSigner::from_config(&config, Operation::GetBrowseNodes);
    assert_eq!(
        signer.endpoint(),
        "https://webservices.amazon.com/paapi5/getbrowsenodes"
    );

    let headers = signer.sign_headers(&test_credential(), b"{}", &test_timestamp())?;
    assert_eq!(headers[header::HOST], "webservices.amazon.com");
    assert_eq!(
        headers["x-amz-target"],
        "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetBrowseNodes"
    );
    let authorization = headers[header::AUTHORIZATION].to_str()?;
    assert!(authorization.starts_with(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20240101/us-east-1/ProductAdvertisingAPI/aws4_request, "
    ));
    Ok(())
}

#[test]
fn test_sign_request_matches_sign_headers() -> Result<()> {
    let signer = init_signing_test(Operation::GetItems)
        .with_time(parse_iso8601("20240101T000000Z")?);

    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    signer.sign_request(&mut parts, GET_ITEMS_PAYLOAD.as_bytes(), Some(&test_credential()))?;

    assert_eq!(parts.headers[header::AUTHORIZATION], GET_ITEMS_AUTHORIZATION);
    assert_eq!(parts.headers[header::CONTENT_ENCODING], "amz-1.0");
    Ok(())
}

#[tokio::test]
async fn test_signer_with_static_provider() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKIDEXAMPLE", "wJalrXUtnFEMI"),
        init_signing_test(Operation::GetItems).with_time(parse_iso8601("20240101T000000Z")?),
    );

    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, GET_ITEMS_PAYLOAD.as_bytes()).await?;

    assert_eq!(parts.headers[header::AUTHORIZATION], GET_ITEMS_AUTHORIZATION);
    Ok(())
}

#[tokio::test]
async fn test_signer_with_env_provider() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("AMAZON_ACCESS_KEY", "AKIDEXAMPLE"),
        ("AMAZON_SECRET_KEY", "wJalrXUtnFEMI"),
    ]));
    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        init_signing_test(Operation::GetItems).with_time(parse_iso8601("20240101T000000Z")?),
    );

    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, GET_ITEMS_PAYLOAD.as_bytes()).await?;

    assert_eq!(parts.headers[header::AUTHORIZATION], GET_ITEMS_AUTHORIZATION);
    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        EnvCredentialProvider::new(),
        init_signing_test(Operation::GetItems),
    );

    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    let err = signer
        .sign(&mut parts, GET_ITEMS_PAYLOAD.as_bytes())
        .await
        .expect_err("signing must fail without credential");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(parts.headers.get(header::AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn test_signer_with_empty_secret() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKIDEXAMPLE", ""),
        init_signing_test(Operation::GetItems),
    );

    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    let err = signer
        .sign(&mut parts, GET_ITEMS_PAYLOAD.as_bytes())
        .await
        .expect_err("signing must fail with an empty secret key");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    Ok(())
}

/// Signs with credentials from the process environment when they are set.
#[tokio::test]
async fn test_signer_with_os_env() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(OsEnv);
    if ctx.env_var_non_empty("AMAZON_ACCESS_KEY").is_none()
        || ctx.env_var_non_empty("AMAZON_SECRET_KEY").is_none()
    {
        log::warn!("AMAZON_ACCESS_KEY or AMAZON_SECRET_KEY is not set, skipped");
        return Ok(());
    }

    let signer = Signer::new(
        ctx,
        EnvCredentialProvider::new(),
        init_signing_test(Operation::GetItems),
    );
    let (mut parts, _) = http::Request::post("https://webservices.amazon.co.jp/paapi5/getitems")
        .body(())?
        .into_parts();
    signer.sign(&mut parts, GET_ITEMS_PAYLOAD.as_bytes()).await?;

    assert!(parts.headers.contains_key(header::AUTHORIZATION));
    Ok(())
}
