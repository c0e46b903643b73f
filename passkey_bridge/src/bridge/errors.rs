use serde::Serialize;
use thiserror::Error;

use super::native::NativeError;

/// Errors returned by passkey registration and authentication.
///
/// This is a closed set. Whatever the native module raises is mapped into
/// exactly one of these variants, so callers can branch on the kind without
/// knowing which platform produced it. Each variant carries the underlying
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasskeyError {
    /// The user dismissed the system prompt or otherwise cancelled the ceremony
    #[error("User cancelled: {0}")]
    UserCancelled(String),

    /// Passkeys are unavailable on this device or for this relying party
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// The request was rejected as malformed (challenge, user id, rp config)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The native provider failed while running the ceremony
    #[error("Native platform error: {0}")]
    Native(String),

    /// Anything that could not be classified
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Discriminant of [`PasskeyError`], serialized with the names the
/// JavaScript side branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    UserCancelled,
    NotSupported,
    InvalidRequest,
    NativeFailure,
    Unknown,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: ErrorKind,
    message: &'a str,
}

impl PasskeyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserCancelled(_) => ErrorKind::UserCancelled,
            Self::NotSupported(_) => ErrorKind::NotSupported,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Native(_) => ErrorKind::NativeFailure,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::UserCancelled(m)
            | Self::NotSupported(m)
            | Self::InvalidRequest(m)
            | Self::Native(m)
            | Self::Unknown(m) => m,
        }
    }

    /// `{"error": <kind>, "message": <message>}` for rejecting a JS promise.
    pub fn to_json(&self) -> String {
        let payload = ErrorPayload {
            error: self.kind(),
            message: self.message(),
        };
        serde_json::to_string(&payload).unwrap_or_else(|_| {
            serde_json::json!({"error": "Unknown", "message": self.message()}).to_string()
        })
    }

    fn from_kind(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::UserCancelled => Self::UserCancelled(message),
            ErrorKind::NotSupported => Self::NotSupported(message),
            ErrorKind::InvalidRequest => Self::InvalidRequest(message),
            ErrorKind::NativeFailure => Self::Native(message),
            ErrorKind::Unknown => Self::Unknown(message),
        }
    }
}

/// Map a native error into the closed taxonomy.
pub fn classify(error: NativeError) -> PasskeyError {
    let classified = match error {
        NativeError::Coded { code, message } => {
            let kind = classify_code(&code);
            let message = if message.is_empty() { code } else { message };
            PasskeyError::from_kind(kind, message)
        }
        NativeError::Opaque(message) => PasskeyError::Unknown(message),
    };
    tracing::warn!("Native passkey call failed: {:?}", classified);
    classified
}

impl From<NativeError> for PasskeyError {
    fn from(error: NativeError) -> Self {
        classify(error)
    }
}

/// Classify a platform code.
///
/// Accepts iOS `ASAuthorizationError` numeric codes, Android exception class
/// names or `TYPE_*` constants (fully qualified or not), and the bridge-level
/// code names the JavaScript module uses.
fn classify_code(code: &str) -> ErrorKind {
    let code = code.trim();

    if let Ok(n) = code.parse::<i64>() {
        return match n {
            1001 => ErrorKind::UserCancelled,
            1003 => ErrorKind::NotSupported,
            1002 | 1004 | 1005 => ErrorKind::NativeFailure,
            1006 => ErrorKind::InvalidRequest,
            _ => ErrorKind::Unknown,
        };
    }

    let normalized: String = code
        .rsplit('.')
        .next()
        .unwrap_or(code)
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    let n = normalized.as_str();

    if n.contains("cancel") {
        ErrorKind::UserCancelled
    } else if [
        "notsupported",
        "unsupported",
        "notconfigured",
        "nocredential",
        "providerconfiguration",
        "nocreateoption",
        "nothandled",
    ]
    .iter()
    .any(|p| n.contains(p))
    {
        ErrorKind::NotSupported
    } else if n.contains("invalidresponse") {
        ErrorKind::NativeFailure
    } else if ["invalid", "badconfiguration", "domexception", "securityerror", "excluded"]
        .iter()
        .any(|p| n.contains(p))
    {
        ErrorKind::InvalidRequest
    } else if n.contains("unknown") {
        ErrorKind::Unknown
    } else if ["failed", "interrupted", "notinteractive", "exception"]
        .iter()
        .any(|p| n.contains(p))
    {
        ErrorKind::NativeFailure
    } else {
        ErrorKind::Unknown
    }
}
