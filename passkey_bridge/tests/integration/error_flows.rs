use std::sync::Arc;

use crate::common::*;
use passkey_bridge::{ErrorKind, NativeError, Passkey, PasskeyError};

fn ios_failing(error: NativeError) -> Passkey {
    Passkey::ios(Arc::new(FixtureIos {
        fail_with: Some(error),
        ..Default::default()
    }))
}

fn android_failing(error: NativeError) -> Passkey {
    Passkey::android(Arc::new(FixtureAndroid {
        fail_with: Some(error),
        ..Default::default()
    }))
}

#[tokio::test]
async fn test_user_cancellation_on_both_platforms() {
    let ios = ios_failing(NativeError::coded("1001", "The operation couldn't be completed."));
    let android = android_failing(NativeError::coded(
        "androidx.credentials.exceptions.GetCredentialCancellationException",
        "activity is cancelled by the user.",
    ));

    for passkey in [ios, android] {
        let err = passkey
            .authenticate(&authentication_request(), false)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UserCancelled);
    }
}

#[tokio::test]
async fn test_raw_native_payload_never_escapes() {
    let raw = NativeError::coded("SomeVendorCode", "vendor says no");
    let err = ios_failing(raw)
        .register(&registration_request(), false)
        .await
        .unwrap_err();

    assert_eq!(err, PasskeyError::Unknown("vendor says no".to_string()));
    let payload: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
    assert_eq!(payload["error"], "Unknown");
    assert_eq!(payload["message"], "vendor says no");
    assert!(payload.get("code").is_none());
}

#[tokio::test]
async fn test_ios_native_rejects_garbage_challenge() {
    // Permissive mode lets malformed input reach the native module, which
    // rejects it; the rejection is still classified.
    let passkey = Passkey::ios(Arc::new(FixtureIos::default())).with_strict_base64(false);
    let mut request = authentication_request();
    request.challenge = "!!".to_string();

    let err = passkey.authenticate(&request, false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

#[tokio::test]
async fn test_strict_mode_stops_garbage_challenge_before_native() {
    let module = Arc::new(FixtureAndroid::default());
    let passkey = Passkey::android(module.clone()).with_strict_base64(true);
    let mut request = registration_request();
    request.challenge = "!!".to_string();

    let err = passkey.register(&request, false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(module.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_each_error_maps_to_one_kind() {
    let cases = [
        ("1001", ErrorKind::UserCancelled),
        ("TYPE_NO_CREATE_OPTIONS", ErrorKind::NotSupported),
        ("CreatePublicKeyCredentialDomException", ErrorKind::InvalidRequest),
        ("CreateCredentialInterruptedException", ErrorKind::NativeFailure),
        ("???", ErrorKind::Unknown),
    ];

    for (code, kind) in cases {
        let err = android_failing(NativeError::coded(code, "msg"))
            .register(&registration_request(), false)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), kind, "{code}");
        assert_eq!(err.message(), "msg");
    }
}
