mod android;
mod ios;
mod passkey;
#[cfg(test)]
mod test_utils;

pub use passkey::{ANDROID_MIN_API_LEVEL, IOS_MIN_VERSION, Passkey, Platform};

use crate::bridge::errors::PasskeyError;
use crate::utils::{is_base64, is_base64url};

/// Reject a challenge outside both base64 alphabets when strict mode is on.
fn validate_challenge(challenge: &str, strict_base64: bool) -> Result<(), PasskeyError> {
    if strict_base64 && !(is_base64(challenge) || is_base64url(challenge)) {
        return Err(PasskeyError::InvalidRequest(format!(
            "Challenge is not valid base64: {challenge}"
        )));
    }
    Ok(())
}
