//! Software stand-ins for the platform passkey providers.
//!
//! They run no real ceremony: payloads are fixed placeholder bytes, except
//! `clientDataJSON`, which embeds the challenge and origin the way a real
//! provider would so the output can be inspected end to end.

use async_trait::async_trait;
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use serde_json::{Value, json};

use passkey_bridge::{
    AndroidPasskeyModule, IosAssertionResponse, IosAttestationResponse, IosAuthenticationResult,
    IosPasskeyModule, IosRegistrationResult, NativeError,
};

const CREDENTIAL_ID: &[u8] = b"demo-credential-0001";
const ATTESTATION_OBJECT: &[u8] = &[0xa3, 0x63, 0x66, 0x6d, 0x74, 0x64, 0x6e, 0x6f, 0x6e, 0x65];
const AUTHENTICATOR_DATA: &[u8] = &[0x49, 0x96, 0x0d, 0xe5, 0x88, 0x0e, 0x8c, 0x68, 0x1d, 0x00];
const SIGNATURE: &[u8] = &[0x30, 0x45, 0x02, 0x21, 0x00, 0xfe, 0xff];

fn client_data(kind: &str, challenge_b64url: &str, rp_id: &str) -> Vec<u8> {
    json!({
        "type": kind,
        "challenge": challenge_b64url,
        "origin": format!("https://{rp_id}"),
        "crossOrigin": false,
    })
    .to_string()
    .into_bytes()
}

fn failure(fail_with: &Option<String>) -> Result<(), NativeError> {
    match fail_with {
        Some(code) => Err(NativeError::coded(code.clone(), "simulated native failure")),
        None => Ok(()),
    }
}

pub(crate) struct SimulatedIos {
    pub(crate) fail_with: Option<String>,
}

#[async_trait]
impl IosPasskeyModule for SimulatedIos {
    async fn register(
        &self,
        rp_id: &str,
        challenge: &str,
        display_name: &str,
        _user_id: &str,
        use_security_key: bool,
    ) -> Result<IosRegistrationResult, NativeError> {
        tracing::info!(
            "Simulated iOS registration for {} at {} (security key: {})",
            display_name,
            rp_id,
            use_security_key
        );
        failure(&self.fail_with)?;
        let challenge = STANDARD
            .decode(challenge)
            .map_err(|e| NativeError::coded("InvalidChallenge", e.to_string()))?;
        let challenge = URL_SAFE_NO_PAD.encode(challenge);

        Ok(IosRegistrationResult {
            credential_id: STANDARD.encode(CREDENTIAL_ID),
            response: IosAttestationResponse {
                raw_client_data_json: STANDARD.encode(client_data(
                    "webauthn.create",
                    &challenge,
                    rp_id,
                )),
                raw_attestation_object: STANDARD.encode(ATTESTATION_OBJECT),
            },
        })
    }

    async fn authenticate(
        &self,
        rp_id: &str,
        challenge: &str,
        use_security_key: bool,
    ) -> Result<IosAuthenticationResult, NativeError> {
        tracing::info!(
            "Simulated iOS assertion at {} (security key: {})",
            rp_id,
            use_security_key
        );
        failure(&self.fail_with)?;
        let challenge = STANDARD
            .decode(challenge)
            .map_err(|e| NativeError::coded("InvalidChallenge", e.to_string()))?;
        let challenge = URL_SAFE_NO_PAD.encode(challenge);

        Ok(IosAuthenticationResult {
            credential_id: STANDARD.encode(CREDENTIAL_ID),
            user_id: STANDARD.encode(b"demo-user"),
            response: IosAssertionResponse {
                raw_authenticator_data: STANDARD.encode(AUTHENTICATOR_DATA),
                raw_client_data_json: STANDARD.encode(client_data(
                    "webauthn.get",
                    &challenge,
                    rp_id,
                )),
                signature: STANDARD.encode(SIGNATURE),
            },
        })
    }

    async fn os_version(&self) -> Result<u32, NativeError> {
        Ok(17)
    }
}

pub(crate) struct SimulatedAndroid {
    pub(crate) fail_with: Option<String>,
}

impl SimulatedAndroid {
    fn parse(request_json: &str) -> Result<(String, String), NativeError> {
        let request: Value = serde_json::from_str(request_json)
            .map_err(|e| NativeError::coded("CreatePublicKeyCredentialDomException", e.to_string()))?;
        let challenge = request["challenge"].as_str().unwrap_or_default().to_string();
        let rp_id = request["rpId"]
            .as_str()
            .or_else(|| request["rp"]["id"].as_str())
            .unwrap_or("localhost")
            .to_string();
        Ok((challenge, rp_id))
    }
}

#[async_trait]
impl AndroidPasskeyModule for SimulatedAndroid {
    async fn register(&self, request_json: String) -> Result<String, NativeError> {
        tracing::info!("Simulated Credential Manager create: {}", request_json);
        failure(&self.fail_with)?;
        let (challenge, rp_id) = Self::parse(&request_json)?;

        Ok(json!({
            "id": URL_SAFE_NO_PAD.encode(CREDENTIAL_ID),
            "type": "public-key",
            "response": {
                "clientDataJSON": URL_SAFE_NO_PAD.encode(client_data("webauthn.create", &challenge, &rp_id)),
                "attestationObject": URL_SAFE_NO_PAD.encode(ATTESTATION_OBJECT),
                "transports": ["internal", "hybrid"],
            },
            "authenticatorAttachment": "platform",
            "clientExtensionResults": {"credProps": {"rk": true}},
        })
        .to_string())
    }

    async fn authenticate(&self, request_json: String) -> Result<String, NativeError> {
        tracing::info!("Simulated Credential Manager get: {}", request_json);
        failure(&self.fail_with)?;
        let (challenge, rp_id) = Self::parse(&request_json)?;

        Ok(json!({
            "id": URL_SAFE_NO_PAD.encode(CREDENTIAL_ID),
            "type": "public-key",
            "response": {
                "clientDataJSON": URL_SAFE_NO_PAD.encode(client_data("webauthn.get", &challenge, &rp_id)),
                "authenticatorData": URL_SAFE_NO_PAD.encode(AUTHENTICATOR_DATA),
                "signature": URL_SAFE_NO_PAD.encode(SIGNATURE),
                "userHandle": URL_SAFE_NO_PAD.encode(b"demo-user"),
            },
            "authenticatorAttachment": "platform",
        })
        .to_string())
    }

    async fn api_level(&self) -> Result<u32, NativeError> {
        Ok(34)
    }
}
