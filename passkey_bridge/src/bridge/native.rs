//! Native passkey capabilities consumed by the adapters.
//!
//! Both platforms run the actual ceremony (key generation, signing, biometric
//! prompt) inside the operating system. These traits describe the shape of
//! that boundary so a host can plug in the real module and tests can plug in
//! deterministic doubles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a native module before classification.
///
/// This is the platform-raw shape; adapters never return it to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NativeError {
    /// Error with a platform code (iOS `ASAuthorizationError` code, Android
    /// exception class or type string, or a bridge-level code name)
    #[error("{code}: {message}")]
    Coded { code: String, message: String },

    /// Error without a recognizable code
    #[error("{0}")]
    Opaque(String),
}

impl NativeError {
    pub fn coded(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Coded {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Attestation returned by the iOS module. Binary fields are standard base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IosRegistrationResult {
    #[serde(rename = "credentialID")]
    pub credential_id: String,
    pub response: IosAttestationResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IosAttestationResponse {
    #[serde(rename = "rawClientDataJSON")]
    pub raw_client_data_json: String,
    pub raw_attestation_object: String,
}

/// Assertion returned by the iOS module. Binary fields are standard base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IosAuthenticationResult {
    #[serde(rename = "credentialID")]
    pub credential_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub response: IosAssertionResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IosAssertionResponse {
    pub raw_authenticator_data: String,
    #[serde(rename = "rawClientDataJSON")]
    pub raw_client_data_json: String,
    pub signature: String,
}

/// iOS AuthenticationServices module.
///
/// Takes discrete arguments; the challenge is standard base64 with padding.
#[async_trait]
pub trait IosPasskeyModule: Send + Sync + 'static {
    async fn register(
        &self,
        rp_id: &str,
        challenge: &str,
        display_name: &str,
        user_id: &str,
        use_security_key: bool,
    ) -> Result<IosRegistrationResult, NativeError>;

    async fn authenticate(
        &self,
        rp_id: &str,
        challenge: &str,
        use_security_key: bool,
    ) -> Result<IosAuthenticationResult, NativeError>;

    /// Major iOS version of the running device.
    async fn os_version(&self) -> Result<u32, NativeError>;
}

/// Android Credential Manager module.
///
/// Takes and returns JSON strings shaped like the WebAuthn JSON serialization;
/// the challenge inside the request is url-safe base64.
#[async_trait]
pub trait AndroidPasskeyModule: Send + Sync + 'static {
    async fn register(&self, request_json: String) -> Result<String, NativeError>;

    async fn authenticate(&self, request_json: String) -> Result<String, NativeError>;

    /// Android API level of the running device.
    async fn api_level(&self) -> Result<u32, NativeError>;
}
