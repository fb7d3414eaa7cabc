mod properties;
mod standard;

use paapi_sign_core::time::Timestamp;
use paapi_sign_v5::{Credential, Operation, RequestSigner};

/// Credential shared by the signing tests.
pub fn test_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI")
}

/// Fixed signing time: 2024-01-01 00:00:00 UTC.
pub fn test_timestamp() -> Timestamp {
    Timestamp::parse("20240101T000000Z").expect("timestamp must be valid")
}

/// Initialize logging and build a signer for the Japan marketplace.
pub fn init_signing_test(operation: Operation) -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new(operation)
}
