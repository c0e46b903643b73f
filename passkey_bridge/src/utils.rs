use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
};
use thiserror::Error;

/// Convert a url-safe base64 string into the standard alphabet with `=` padding.
///
/// `-` becomes `+`, `_` becomes `/`, and the result is padded until its length
/// is a multiple of 4. The alphabet is not validated; malformed input is
/// converted character by character and passed through.
pub fn to_standard(url_safe: &str) -> String {
    let mut out: String = url_safe
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

/// Convert a standard base64 string into url-safe base64 without padding.
///
/// `+` becomes `-`, `/` becomes `_`, and trailing `=` are stripped.
pub fn to_url_safe(standard: &str) -> String {
    standard
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// True when `input` decodes as url-safe base64 (padding optional).
pub fn is_base64url(input: &str) -> bool {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('=')).is_ok()
}

/// True when `input` decodes as standard base64 (padding optional).
pub fn is_base64(input: &str) -> bool {
    STANDARD_NO_PAD.decode(input.trim_end_matches('=')).is_ok()
}

pub fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

pub fn base64url_encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}
