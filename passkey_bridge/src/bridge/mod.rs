mod errors;
mod main;
mod native;
mod types;

pub use errors::{ErrorKind, PasskeyError, classify};

pub use main::{ANDROID_MIN_API_LEVEL, IOS_MIN_VERSION, Passkey, Platform};

pub use native::{
    AndroidPasskeyModule, IosAssertionResponse, IosAttestationResponse, IosAuthenticationResult,
    IosPasskeyModule, IosRegistrationResult, NativeError,
};

pub use types::{
    AssertionResponse, AttestationResponse, AuthenticationRequest, AuthenticationResult,
    AuthenticatorSelection, CredentialDescriptor, PUBLIC_KEY, PubKeyCredParam, RegistrationRequest,
    RegistrationResult, RelyingParty, UserEntity,
};
