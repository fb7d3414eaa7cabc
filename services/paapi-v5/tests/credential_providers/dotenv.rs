use super::{create_dotenv_file, create_test_context_with_env};
use paapi_sign_core::{ErrorKind, ProvideCredential};
use paapi_sign_v5::DotenvCredentialProvider;

#[tokio::test]
async fn test_dotenv_credential_provider_from_env_path() {
    let f = create_dotenv_file(
        "AMAZON_ACCESS_KEY=AKIDEXAMPLE\nAMAZON_SECRET_KEY='wJalrXUtnFEMI'\n",
    );
    let path = f.path().to_str().expect("temp path must be utf-8");
    let ctx = create_test_context_with_env(&[("AMAZON_PAAPI_DOTENV_FILE", path)]);

    let cred = DotenvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .expect("DotenvCredentialProvider should not fail")
        .expect("Should load credentials from dotenv file");
    assert_eq!(cred.access_key, "AKIDEXAMPLE");
    assert_eq!(cred.secret_key, "wJalrXUtnFEMI");
}

#[tokio::test]
async fn test_dotenv_credential_provider_ignores_process_env() {
    let f = create_dotenv_file("AMAZON_PARTNER_TAG=partner-22\n");
    let path = f.path().to_str().expect("temp path must be utf-8");
    let ctx = create_test_context_with_env(&[
        ("AMAZON_ACCESS_KEY", "AKIDEXAMPLE"),
        ("AMAZON_SECRET_KEY", "wJalrXUtnFEMI"),
    ]);

    let cred = DotenvCredentialProvider::new()
        .with_path(path)
        .provide_credential(&ctx)
        .await
        .expect("DotenvCredentialProvider should not fail");
    assert!(cred.is_none());
}

#[tokio::test]
async fn test_dotenv_credential_provider_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir must be created");
    let path = dir.path().join("missing.env");
    let ctx = create_test_context_with_env(&[]);

    let cred = DotenvCredentialProvider::new()
        .with_path(path.to_str().expect("temp path must be utf-8"))
        .provide_credential(&ctx)
        .await
        .expect("missing dotenv file should not fail");
    assert!(cred.is_none());
}

#[tokio::test]
async fn test_dotenv_credential_provider_malformed_file() {
    let f = create_dotenv_file("AMAZON_ACCESS_KEY=AKIDEXAMPLE\nnot a valid line\n");
    let path = f.path().to_str().expect("temp path must be utf-8");
    let ctx = create_test_context_with_env(&[]);

    let err = DotenvCredentialProvider::new()
        .with_path(path)
        .provide_credential(&ctx)
        .await
        .expect_err("malformed dotenv file must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
