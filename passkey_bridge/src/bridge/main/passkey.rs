use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::bridge::errors::PasskeyError;
use crate::bridge::native::{AndroidPasskeyModule, IosPasskeyModule};
use crate::bridge::types::{
    AuthenticationRequest, AuthenticationResult, RegistrationRequest, RegistrationResult,
};
use crate::config::{PASSKEY_DEFAULT_SECURITY_KEY, PASSKEY_STRICT_BASE64};

use super::{android, ios};

/// First iOS release with AuthenticationServices passkey support.
pub const IOS_MIN_VERSION: u32 = 15;

/// First Android API level supported by Credential Manager passkeys.
pub const ANDROID_MIN_API_LEVEL: u32 = 28;

/// Native backend a [`Passkey`] dispatches to.
#[derive(Clone)]
pub enum Platform {
    Ios(Arc<dyn IosPasskeyModule>),
    Android(Arc<dyn AndroidPasskeyModule>),
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ios(_) => "ios",
            Self::Android(_) => "android",
        }
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Platform").field(&self.name()).finish()
    }
}

/// Passkey ceremonies over a native backend.
///
/// Every call is one native round-trip. Nothing is cached or shared between
/// calls, so a `Passkey` can be cloned freely and used concurrently; ordering
/// of overlapping system prompts is left to the platform.
#[derive(Clone, Debug)]
pub struct Passkey {
    platform: Platform,
    strict_base64: bool,
}

impl Passkey {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            strict_base64: *PASSKEY_STRICT_BASE64,
        }
    }

    pub fn ios(module: Arc<dyn IosPasskeyModule>) -> Self {
        Self::new(Platform::Ios(module))
    }

    pub fn android(module: Arc<dyn AndroidPasskeyModule>) -> Self {
        Self::new(Platform::Android(module))
    }

    /// Reject challenges that are not valid base64 before the native call.
    pub fn with_strict_base64(mut self, strict: bool) -> Self {
        self.strict_base64 = strict;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Create a new passkey.
    ///
    /// `with_security_key` lets the system prompt offer external authenticators
    /// (USB/NFC/BLE keys) instead of only the platform authenticator. Android's
    /// Credential Manager takes no such hint, so the flag is ignored there.
    ///
    /// On Android the typed request is re-serialized before forwarding, which
    /// omits empty lists and `None` fields (an explicit `"excludeCredentials": []`
    /// or `"extensions": null` does not reach the native layer). Use
    /// [`Passkey::register_json`] to forward a request verbatim.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
        with_security_key: bool,
    ) -> Result<RegistrationResult, PasskeyError> {
        match &self.platform {
            Platform::Ios(module) => {
                ios::register(
                    module.as_ref(),
                    request,
                    with_security_key,
                    self.strict_base64,
                )
                .await
            }
            Platform::Android(module) => {
                ignore_security_key(with_security_key);
                android::register(module.as_ref(), to_value(request)?, self.strict_base64).await
            }
        }
    }

    /// Sign in with an existing passkey.
    ///
    /// The Android re-serialization caveat of [`Passkey::register`] applies;
    /// [`Passkey::authenticate_json`] forwards verbatim.
    pub async fn authenticate(
        &self,
        request: &AuthenticationRequest,
        with_security_key: bool,
    ) -> Result<AuthenticationResult, PasskeyError> {
        match &self.platform {
            Platform::Ios(module) => {
                ios::authenticate(
                    module.as_ref(),
                    request,
                    with_security_key,
                    self.strict_base64,
                )
                .await
            }
            Platform::Android(module) => {
                ignore_security_key(with_security_key);
                android::authenticate(module.as_ref(), to_value(request)?, self.strict_base64)
                    .await
            }
        }
    }

    pub async fn create_platform_key(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResult, PasskeyError> {
        self.register(request, false).await
    }

    pub async fn create_security_key(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResult, PasskeyError> {
        self.register(request, true).await
    }

    pub async fn get_platform_key(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResult, PasskeyError> {
        self.authenticate(request, false).await
    }

    pub async fn get_security_key(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResult, PasskeyError> {
        self.authenticate(request, true).await
    }

    /// Whether the device OS is recent enough for passkeys.
    ///
    /// A failed version lookup counts as unsupported.
    pub async fn is_supported(&self) -> bool {
        let (version, minimum) = match &self.platform {
            Platform::Ios(module) => (module.os_version().await, IOS_MIN_VERSION),
            Platform::Android(module) => (module.api_level().await, ANDROID_MIN_API_LEVEL),
        };
        match version {
            Ok(v) => v >= minimum,
            Err(e) => {
                tracing::warn!(
                    "Could not read {} version: {}",
                    self.platform.name(),
                    e
                );
                false
            }
        }
    }

    /// [`Passkey::register`] over JSON strings, for hosts that pass raw JSON
    /// across the JavaScript boundary.
    ///
    /// On Android the request is only parsed as JSON and forwarded as
    /// received, including fields the typed request would drop or require.
    /// The one check is that `challenge` is a string. On iOS it must parse as
    /// a [`RegistrationRequest`].
    pub async fn register_json(
        &self,
        request_json: &str,
        with_security_key: Option<bool>,
    ) -> Result<String, PasskeyError> {
        let with_security_key = with_security_key.unwrap_or(*PASSKEY_DEFAULT_SECURITY_KEY);
        let value = parse_value(request_json)?;
        let result = match &self.platform {
            Platform::Ios(module) => {
                let request: RegistrationRequest = from_value(value)?;
                ios::register(
                    module.as_ref(),
                    &request,
                    with_security_key,
                    self.strict_base64,
                )
                .await?
            }
            Platform::Android(module) => {
                ignore_security_key(with_security_key);
                android::register(module.as_ref(), value, self.strict_base64).await?
            }
        };
        to_json(&result)
    }

    /// [`Passkey::authenticate`] over JSON strings.
    ///
    /// As with [`Passkey::register_json`], Android forwards the parsed JSON
    /// as is, so `rpId` may be absent there.
    pub async fn authenticate_json(
        &self,
        request_json: &str,
        with_security_key: Option<bool>,
    ) -> Result<String, PasskeyError> {
        let with_security_key = with_security_key.unwrap_or(*PASSKEY_DEFAULT_SECURITY_KEY);
        let value = parse_value(request_json)?;
        let result = match &self.platform {
            Platform::Ios(module) => {
                let request: AuthenticationRequest = from_value(value)?;
                ios::authenticate(
                    module.as_ref(),
                    &request,
                    with_security_key,
                    self.strict_base64,
                )
                .await?
            }
            Platform::Android(module) => {
                ignore_security_key(with_security_key);
                android::authenticate(module.as_ref(), value, self.strict_base64).await?
            }
        };
        to_json(&result)
    }
}

fn ignore_security_key(with_security_key: bool) {
    if with_security_key {
        tracing::debug!("Security key flag has no Credential Manager equivalent; ignoring");
    }
}

fn to_value<T: Serialize>(request: &T) -> Result<Value, PasskeyError> {
    serde_json::to_value(request)
        .map_err(|e| PasskeyError::InvalidRequest(format!("Failed to serialize request: {e}")))
}

fn to_json<T: Serialize>(result: &T) -> Result<String, PasskeyError> {
    serde_json::to_string(result)
        .map_err(|e| PasskeyError::Unknown(format!("Failed to serialize result: {e}")))
}

fn parse_value(request_json: &str) -> Result<Value, PasskeyError> {
    serde_json::from_str(request_json)
        .map_err(|e| PasskeyError::InvalidRequest(format!("Invalid request JSON: {e}")))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, PasskeyError> {
    serde_json::from_value(value)
        .map_err(|e| PasskeyError::InvalidRequest(format!("Invalid request: {e}")))
}
