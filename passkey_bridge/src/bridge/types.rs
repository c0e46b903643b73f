use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credential type reported on every result.
pub const PUBLIC_KEY: &str = "public-key";

fn public_key_type() -> String {
    PUBLIC_KEY.to_string()
}

/// Options for creating a new passkey.
///
/// Mirrors the JSON form of WebAuthn `PublicKeyCredentialCreationOptions` as a
/// relying-party server sends it. The challenge is standard base64. Fields this
/// type does not name are kept in `extra` and travel with the request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub challenge: String,
    pub rp: RelyingParty,
    pub user: UserEntity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_credentials: Vec<CredentialDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options for asserting an existing passkey.
///
/// Mirrors the JSON form of WebAuthn `PublicKeyCredentialRequestOptions`.
/// The challenge is standard base64.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequest {
    pub challenge: String,
    pub rp_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_credentials: Vec<CredentialDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelyingParty {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialDescriptor {
    #[serde(rename = "type", default = "public_key_type")]
    pub type_: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

/// Attestation credential in FIDO2 JSON form.
///
/// `id` and `raw_id` hold the same url-safe base64 value and `type_` is
/// always [`PUBLIC_KEY`] once the result leaves an adapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    pub id: String,
    #[serde(default)]
    pub raw_id: String,
    #[serde(rename = "type", default = "public_key_type")]
    pub type_: String,
    pub response: AttestationResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub attestation_object: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Assertion credential in FIDO2 JSON form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResult {
    pub id: String,
    #[serde(default)]
    pub raw_id: String,
    #[serde(rename = "type", default = "public_key_type")]
    pub type_: String,
    pub response: AssertionResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub authenticator_data: String,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttestationResponse {
    pub fn new(client_data_json: String, attestation_object: String) -> Self {
        Self {
            client_data_json,
            attestation_object,
            extra: Map::new(),
        }
    }
}

impl AssertionResponse {
    pub fn new(
        client_data_json: String,
        authenticator_data: String,
        signature: String,
        user_handle: Option<String>,
    ) -> Self {
        Self {
            client_data_json,
            authenticator_data,
            signature,
            user_handle,
            extra: Map::new(),
        }
    }
}

impl RegistrationResult {
    pub fn new(id: String, response: AttestationResponse) -> Self {
        Self {
            raw_id: id.clone(),
            id,
            type_: public_key_type(),
            response,
            extra: Map::new(),
        }
    }

    /// Force `raw_id == id` and `type_ == "public-key"`, keeping everything else.
    pub(crate) fn normalized(mut self) -> Self {
        self.raw_id = self.id.clone();
        self.type_ = public_key_type();
        self
    }
}

impl AuthenticationResult {
    pub fn new(id: String, response: AssertionResponse) -> Self {
        Self {
            raw_id: id.clone(),
            id,
            type_: public_key_type(),
            response,
            extra: Map::new(),
        }
    }

    /// Force `raw_id == id` and `type_ == "public-key"`, keeping everything else.
    pub(crate) fn normalized(mut self) -> Self {
        self.raw_id = self.id.clone();
        self.type_ = public_key_type();
        self
    }
}
