use super::{init_signing_test, test_credential, test_timestamp};
use anyhow::Result;
use http::header;
use paapi_sign_core::time::Timestamp;
use paapi_sign_v5::{Credential, Operation, SigningKey};
use pretty_assertions::{assert_eq, assert_ne};
use test_case::test_case;

fn authorization(
    operation: Operation,
    cred: &Credential,
    payload: &[u8],
    timestamp: &Timestamp,
) -> Result<String> {
    let headers = init_signing_test(operation).sign_headers(cred, payload, timestamp)?;
    Ok(headers[header::AUTHORIZATION].to_str()?.to_string())
}

#[test]
fn test_signing_is_deterministic() -> Result<()> {
    let payload = br#"{"Keywords":"kindle","PartnerTag":"partner-22"}"#;

    let (cred, ts) = (test_credential(), test_timestamp());

    let first = authorization(Operation::SearchItems, &cred, payload, &ts)?;
    let second = authorization(Operation::SearchItems, &cred, payload, &ts)?;
    assert_eq!(first, second);
    Ok(())
}

#[test_case(br#"{"ItemIds":["B000000001"]}"#; "different item")]
#[test_case(br#"{"ItemIds":["B000000000"]} "#; "trailing space")]
#[test_case(br#"{"ItemIds": ["B000000000"]}"#; "reformatted json")]
fn test_payload_changes_signature(payload: &[u8]) -> Result<()> {
    let (cred, ts) = (test_credential(), test_timestamp());

    let base = authorization(
        Operation::GetItems,
        &cred,
        br#"{"ItemIds":["B000000000"]}"#,
        &ts,
    )?;
    let changed = authorization(Operation::GetItems, &cred, payload, &ts)?;

    assert_ne!(base, changed);
    Ok(())
}

#[test]
fn test_operation_changes_signature() -> Result<()> {
    let payload = b"{}";

    let mut seen = Vec::new();
    for operation in Operation::ALL {
        let v = authorization(operation, &test_credential(), payload, &test_timestamp())?;
        assert!(!seen.contains(&v), "{operation} must sign differently");
        seen.push(v);
    }
    Ok(())
}

#[test]
fn test_date_changes_signing_key() -> Result<()> {
    let payload = b"{}";
    let next_day = Timestamp::parse("20240102T000000Z")?;

    let cred = test_credential();

    let first = authorization(Operation::GetItems, &cred, payload, &test_timestamp())?;
    let second = authorization(Operation::GetItems, &cred, payload, &next_day)?;
    assert_ne!(first, second);
    assert!(second.contains("Credential=AKIDEXAMPLE/20240102/us-west-2/"));

    assert_eq!(
        hex::encode(
            SigningKey::derive("test-secret", "20240102", "us-west-2", "ProductAdvertisingAPI")
                .as_bytes()
        ),
        "5efc306cbdd284795deabe0711402e2d2ab60e4b7eb2e14f3d2b0f43064ff664"
    );
    Ok(())
}

#[test]
fn test_secret_key_changes_signature_only() -> Result<()> {
    let payload = b"{}";
    let other = Credential::new("AKIDEXAMPLE", "another-secret");

    let ts = test_timestamp();

    let first = authorization(Operation::GetItems, &test_credential(), payload, &ts)?;
    let second = authorization(Operation::GetItems, &other, payload, &ts)?;

    let (first_prefix, first_sig) = first
        .rsplit_once("Signature=")
        .expect("must have signature");
    let (second_prefix, second_sig) = second
        .rsplit_once("Signature=")
        .expect("must have signature");
    assert_eq!(first_prefix, second_prefix);
    assert_ne!(first_sig, second_sig);
    assert_eq!(first_sig.len(), 64);
    Ok(())
}

#[test]
fn test_secret_never_appears_in_headers() -> Result<()> {
    let cred = Credential::new("AKIDEXAMPLE", "a-very-distinct-secret-value");
    let headers =
        init_signing_test(Operation::GetItems).sign_headers(&cred, b"{}", &test_timestamp())?;

    for (_, value) in headers.iter() {
        assert!(!value.to_str()?.contains("a-very-distinct-secret-value"));
    }
    assert!(!format!("{cred:?}").contains("a-very-distinct-secret-value"));
    Ok(())
}
