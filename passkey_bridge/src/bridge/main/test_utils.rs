//! Deterministic native module doubles for adapter tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::bridge::native::{
    AndroidPasskeyModule, IosAssertionResponse, IosAttestationResponse, IosAuthenticationResult,
    IosPasskeyModule, IosRegistrationResult, NativeError,
};
use crate::bridge::types::{AuthenticationRequest, RegistrationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IosCall {
    Register {
        rp_id: String,
        challenge: String,
        display_name: String,
        user_id: String,
        use_security_key: bool,
    },
    Authenticate {
        rp_id: String,
        challenge: String,
        use_security_key: bool,
    },
}

/// iOS double returning fixed standard-base64 payloads.
pub(crate) struct MockIosModule {
    calls: Mutex<Vec<IosCall>>,
    error: Option<NativeError>,
    user_id: String,
    os_version: Result<u32, NativeError>,
}

impl MockIosModule {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            error: None,
            user_id: "dXNlci0x".to_string(),
            os_version: Ok(17),
        }
    }

    pub(crate) fn failing(error: NativeError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    pub(crate) fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    pub(crate) fn with_os_version(mut self, version: Result<u32, NativeError>) -> Self {
        self.os_version = version;
        self
    }

    pub(crate) fn calls(&self) -> Vec<IosCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: IosCall) -> Result<(), NativeError> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IosPasskeyModule for MockIosModule {
    async fn register(
        &self,
        rp_id: &str,
        challenge: &str,
        display_name: &str,
        user_id: &str,
        use_security_key: bool,
    ) -> Result<IosRegistrationResult, NativeError> {
        self.record(IosCall::Register {
            rp_id: rp_id.to_string(),
            challenge: challenge.to_string(),
            display_name: display_name.to_string(),
            user_id: user_id.to_string(),
            use_security_key,
        })?;
        Ok(IosRegistrationResult {
            credential_id: "ZGVmZw==".to_string(),
            response: IosAttestationResponse {
                raw_client_data_json: "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIn0=".to_string(),
                raw_attestation_object: "o2NmbXRkbm9uZQ+/".to_string(),
            },
        })
    }

    async fn authenticate(
        &self,
        rp_id: &str,
        challenge: &str,
        use_security_key: bool,
    ) -> Result<IosAuthenticationResult, NativeError> {
        self.record(IosCall::Authenticate {
            rp_id: rp_id.to_string(),
            challenge: challenge.to_string(),
            use_security_key,
        })?;
        Ok(IosAuthenticationResult {
            credential_id: "ZGVmZw==".to_string(),
            user_id: self.user_id.clone(),
            response: IosAssertionResponse {
                raw_authenticator_data: "SZYN5YgO+/8=".to_string(),
                raw_client_data_json: "eyJ0eXBlIjoid2ViYXV0aG4uZ2V0In0=".to_string(),
                signature: "MEUCIQ+/".to_string(),
            },
        })
    }

    async fn os_version(&self) -> Result<u32, NativeError> {
        self.os_version.clone()
    }
}

/// Android double that records the JSON it receives and answers with a
/// canned JSON reply.
pub(crate) struct MockAndroidModule {
    requests: Mutex<Vec<String>>,
    reply: Result<String, NativeError>,
    api_level: Result<u32, NativeError>,
}

impl MockAndroidModule {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(reply.to_string()),
            api_level: Ok(34),
        }
    }

    pub(crate) fn failing(error: NativeError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(error),
            api_level: Ok(34),
        }
    }

    pub(crate) fn with_api_level(mut self, level: Result<u32, NativeError>) -> Self {
        self.api_level = level;
        self
    }

    pub(crate) fn requests(&self) -> Vec<serde_json::Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| serde_json::from_str(r).unwrap())
            .collect()
    }

    fn answer(&self, request_json: String) -> Result<String, NativeError> {
        self.requests.lock().unwrap().push(request_json);
        self.reply.clone()
    }
}

#[async_trait]
impl AndroidPasskeyModule for MockAndroidModule {
    async fn register(&self, request_json: String) -> Result<String, NativeError> {
        self.answer(request_json)
    }

    async fn authenticate(&self, request_json: String) -> Result<String, NativeError> {
        self.answer(request_json)
    }

    async fn api_level(&self) -> Result<u32, NativeError> {
        self.api_level.clone()
    }
}

pub(crate) const ANDROID_REGISTRATION_REPLY: &str = r#"{
    "id": "ZGVmZw",
    "type": "public-key",
    "response": {
        "clientDataJSON": "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIn0",
        "attestationObject": "o2NmbXRkbm9uZQ",
        "transports": ["internal", "hybrid"]
    },
    "authenticatorAttachment": "platform",
    "clientExtensionResults": {"credProps": {"rk": true}}
}"#;

pub(crate) const ANDROID_AUTHENTICATION_REPLY: &str = r#"{
    "id": "ZGVmZw",
    "rawId": "stale-value",
    "type": "public-key",
    "response": {
        "clientDataJSON": "eyJ0eXBlIjoid2ViYXV0aG4uZ2V0In0",
        "authenticatorData": "SZYN5YgO",
        "signature": "MEUCIQ",
        "userHandle": "dXNlci0x"
    },
    "authenticatorAttachment": "platform"
}"#;

pub(crate) fn registration_request(challenge: &str) -> RegistrationRequest {
    serde_json::from_value(serde_json::json!({
        "challenge": challenge,
        "rp": {"id": "example.com", "name": "Example"},
        "user": {"id": "dXNlci0x", "name": "alice", "displayName": "Alice Example"},
        "pubKeyCredParams": [{"type": "public-key", "alg": -7}],
        "timeout": 60000,
        "attestation": "none",
        "authenticatorSelection": {"residentKey": "required", "userVerification": "required"}
    }))
    .unwrap()
}

pub(crate) fn authentication_request(challenge: &str) -> AuthenticationRequest {
    AuthenticationRequest {
        challenge: challenge.to_string(),
        rp_id: "example.com".to_string(),
        allow_credentials: Vec::new(),
        timeout: Some(60000),
        user_verification: Some("required".to_string()),
        extensions: None,
        extra: serde_json::Map::new(),
    }
}
