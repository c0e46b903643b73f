//! passkey_bridge - Native passkey ceremonies behind one FIDO2 JSON API
//!
//! This crate sits between a JavaScript application and the operating
//! system's passkey provider (iOS AuthenticationServices, Android Credential
//! Manager). It re-encodes challenges into the alphabet each native API
//! expects, reshapes native results into WebAuthn `PublicKeyCredential` JSON
//! with url-safe unpadded base64, and folds native failures into one small
//! error taxonomy.
//!
//! The native modules are injected through [`IosPasskeyModule`] and
//! [`AndroidPasskeyModule`], so no key material or signing ever passes
//! through this crate.

mod bridge;
mod config;
mod utils;

pub use bridge::{
    ANDROID_MIN_API_LEVEL, AndroidPasskeyModule, AssertionResponse, AttestationResponse,
    AuthenticationRequest, AuthenticationResult, AuthenticatorSelection, CredentialDescriptor,
    ErrorKind, IOS_MIN_VERSION, IosAssertionResponse, IosAttestationResponse,
    IosAuthenticationResult, IosPasskeyModule, IosRegistrationResult, NativeError, PUBLIC_KEY,
    Passkey, PasskeyError, Platform, PubKeyCredParam, RegistrationRequest, RegistrationResult,
    RelyingParty, UserEntity, classify,
};

pub use config::{PASSKEY_DEFAULT_SECURITY_KEY, PASSKEY_STRICT_BASE64};

pub use utils::{
    UtilError, base64url_decode, base64url_encode, is_base64, is_base64url, to_standard,
    to_url_safe,
};
