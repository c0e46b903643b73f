use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::bridge::errors::PasskeyError;
use crate::bridge::native::AndroidPasskeyModule;
use crate::bridge::types::{AuthenticationResult, RegistrationResult};
use crate::utils::to_url_safe;

use super::validate_challenge;

/// Create a passkey through Credential Manager.
///
/// `request` is forwarded verbatim except for `challenge`, which is rewritten
/// from standard to url-safe base64.
pub(super) async fn register(
    module: &dyn AndroidPasskeyModule,
    mut request: Value,
    strict_base64: bool,
) -> Result<RegistrationResult, PasskeyError> {
    rewrite_challenge(&mut request, strict_base64)?;
    tracing::debug!("Android register request: {}", request);

    let reply = module.register(request.to_string()).await?;
    let result: RegistrationResult = parse_reply(&reply, "registration")?;
    Ok(result.normalized())
}

/// Assert an existing passkey through Credential Manager.
pub(super) async fn authenticate(
    module: &dyn AndroidPasskeyModule,
    mut request: Value,
    strict_base64: bool,
) -> Result<AuthenticationResult, PasskeyError> {
    rewrite_challenge(&mut request, strict_base64)?;
    tracing::debug!("Android authenticate request: {}", request);

    let reply = module.authenticate(request.to_string()).await?;
    let result: AuthenticationResult = parse_reply(&reply, "authentication")?;
    Ok(result.normalized())
}

fn rewrite_challenge(request: &mut Value, strict_base64: bool) -> Result<(), PasskeyError> {
    let Some(Value::String(challenge)) = request.get_mut("challenge") else {
        return Err(PasskeyError::InvalidRequest(
            "Request has no challenge string".to_string(),
        ));
    };
    validate_challenge(challenge, strict_base64)?;
    *challenge = to_url_safe(challenge);
    Ok(())
}

fn parse_reply<T: DeserializeOwned>(reply: &str, ceremony: &str) -> Result<T, PasskeyError> {
    serde_json::from_str(reply).map_err(|e| {
        tracing::warn!("Unexpected {} reply from Credential Manager: {}", ceremony, e);
        PasskeyError::Native(format!("Malformed {ceremony} result: {e}"))
    })
}
