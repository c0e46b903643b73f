use crate::bridge::errors::PasskeyError;
use crate::bridge::native::IosPasskeyModule;
use crate::bridge::types::{
    AssertionResponse, AttestationResponse, AuthenticationRequest, AuthenticationResult,
    RegistrationRequest, RegistrationResult,
};
use crate::utils::{to_standard, to_url_safe};

use super::validate_challenge;

/// Create a passkey through AuthenticationServices.
///
/// The module receives discrete arguments and a standard base64 challenge.
/// Its standard base64 output is re-encoded as url-safe base64 without padding.
pub(super) async fn register(
    module: &dyn IosPasskeyModule,
    request: &RegistrationRequest,
    with_security_key: bool,
    strict_base64: bool,
) -> Result<RegistrationResult, PasskeyError> {
    validate_challenge(&request.challenge, strict_base64)?;
    let challenge = to_standard(&request.challenge);

    tracing::debug!(
        "iOS register: rp_id={}, security_key={}",
        request.rp.id,
        with_security_key
    );

    let native = module
        .register(
            &request.rp.id,
            &challenge,
            &request.user.display_name,
            &request.user.id,
            with_security_key,
        )
        .await?;

    let response = AttestationResponse::new(
        to_url_safe(&native.response.raw_client_data_json),
        to_url_safe(&native.response.raw_attestation_object),
    );

    Ok(RegistrationResult::new(
        to_url_safe(&native.credential_id),
        response,
    ))
}

/// Assert an existing passkey through AuthenticationServices.
pub(super) async fn authenticate(
    module: &dyn IosPasskeyModule,
    request: &AuthenticationRequest,
    with_security_key: bool,
    strict_base64: bool,
) -> Result<AuthenticationResult, PasskeyError> {
    validate_challenge(&request.challenge, strict_base64)?;
    let challenge = to_standard(&request.challenge);

    tracing::debug!(
        "iOS authenticate: rp_id={}, security_key={}",
        request.rp_id,
        with_security_key
    );

    let native = module
        .authenticate(&request.rp_id, &challenge, with_security_key)
        .await?;

    // Security keys may not return a user handle
    let user_handle = Some(to_url_safe(&native.user_id)).filter(|h| !h.is_empty());

    let response = AssertionResponse::new(
        to_url_safe(&native.response.raw_client_data_json),
        to_url_safe(&native.response.raw_authenticator_data),
        to_url_safe(&native.response.signature),
        user_handle,
    );

    Ok(AuthenticationResult::new(
        to_url_safe(&native.credential_id),
        response,
    ))
}
