//! Central configuration for the passkey_bridge crate

use std::{env, sync::LazyLock};

/// Reject challenges that are not valid base64 before calling the native module.
///
/// The codec itself is permissive; this switch only affects the adapters.
/// Default: false
pub static PASSKEY_STRICT_BASE64: LazyLock<bool> =
    LazyLock::new(|| parse_bool_var("PASSKEY_STRICT_BASE64", false));

/// Security key flag used by the JSON entry points when the host does not pass one.
///
/// Default: false
pub static PASSKEY_DEFAULT_SECURITY_KEY: LazyLock<bool> =
    LazyLock::new(|| parse_bool_var("PASSKEY_DEFAULT_SECURITY_KEY", false));

fn parse_bool_var(name: &str, default: bool) -> bool {
    env::var(name).map_or(default, |v| parse_bool(name, &v, default))
}

fn parse_bool(name: &str, value: &str, default: bool) -> bool {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        invalid => {
            tracing::warn!("Invalid {}: {}. Using default '{}'", name, invalid, default);
            default
        }
    }
}
